mod handle;
mod record;
mod reflect;

pub use handle::impl_ as handle;
pub use record::impl_ as record;
pub use reflect::impl_ as reflect;
