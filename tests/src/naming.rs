#![allow(non_snake_case)]

use flatkeys::{Builder, Record};

#[derive(Debug, Default, Record)]
pub struct Flat {
    #[flat(key = "baz", k = "z")]
    pub Baz: String,
}

#[derive(Debug, Default, Record)]
pub struct Nested {
    #[flat(key = "foo")]
    pub Foo: String,
    pub Bar: Flat,
}

fn sample() -> Nested {
    Nested {
        Foo: String::from("foo"),
        Bar: Flat { Baz: String::from("baz") },
    }
}

#[test]
fn declared_name_and_override() {
    let sample = sample();
    assert_eq!(flatkeys::keys(&sample).unwrap(), ["foo", "Barbaz"]);

    let values = flatkeys::values(&sample).unwrap();
    assert_eq!(values[0].downcast_ref::<String>().unwrap(), "foo");
    assert_eq!(values[1].downcast_ref::<String>().unwrap(), "baz");
}

#[test]
fn delimiter() {
    assert_eq!(
        Builder::new("key", " -> ").keys(&sample()).unwrap(),
        ["foo", "Bar -> baz"]
    );
}

#[test]
fn custom_tag() {
    assert_eq!(Builder::new("k", "_").keys(&sample()).unwrap(), ["Foo", "Bar_z"]);
}

#[test]
fn field_name() {
    let sample = sample();
    let infos = sample.field_infos();
    assert_eq!(flatkeys::DEFAULT.field_name(&infos[0]), "foo");
    assert_eq!(flatkeys::DEFAULT.field_name(&infos[1]), "Bar");
    assert_eq!(Builder::new("k", "").field_name(&infos[0]), "Foo");
}

#[derive(Debug, Record)]
pub struct Empty {
    #[flat(key = "")]
    pub name: u8,
}

#[test]
fn empty_override() {
    assert_eq!(flatkeys::keys(&Empty { name: 1 }).unwrap(), ["name"]);
}

#[derive(Debug, Record)]
pub struct Raw {
    pub r#type: u8,
    #[flat(r#type = "kind")]
    pub r#match: u8,
}

#[test]
fn raw_identifiers() {
    let raw = Raw { r#type: 0, r#match: 1 };
    assert_eq!(flatkeys::keys(&raw).unwrap(), ["type", "match"]);
    assert_eq!(Builder::new("type", "").keys(&raw).unwrap(), ["type", "kind"]);
}

#[allow(dead_code)]
#[derive(Debug, Record)]
pub struct Tuple(pub u8, #[flat(key = "second")] pub String, u16);

#[derive(Debug, Record)]
pub struct Outer {
    pub tuple: Tuple,
}

#[test]
fn tuple_fields() {
    let tuple = Tuple(1, String::from("2"), 3);
    assert_eq!(flatkeys::keys(&tuple).unwrap(), ["0", "second"]);

    let outer = Outer { tuple };
    assert_eq!(Builder::new("key", ".").keys(&outer).unwrap(), ["tuple.0", "tuple.second"]);
}

#[derive(Debug, Record)]
pub struct Unit;

#[derive(Debug, Record)]
pub struct WithUnit {
    pub unit: Unit,
    pub after: bool,
}

#[test]
fn unit_record() {
    assert!(flatkeys::keys(&Unit).unwrap().is_empty());
    assert!(flatkeys::values(&Unit).unwrap().is_empty());

    let sample = WithUnit { unit: Unit, after: true };
    assert_eq!(flatkeys::keys(&sample).unwrap(), ["unit", "after"]);
    assert!(flatkeys::values(&sample).unwrap()[0].downcast_ref::<Unit>().is_some());
}

#[test]
fn ambiguous_concatenation() {
    #[derive(Debug, Record)]
    pub struct Ab {
        pub b: u8,
    }

    #[derive(Debug, Record)]
    pub struct Collision {
        pub ab: u8,
        pub a: Ab,
    }

    let sample = Collision { ab: 1, a: Ab { b: 2 } };
    assert_eq!(flatkeys::keys(&sample).unwrap(), ["ab", "ab"]);
    assert_eq!(Builder::new("key", ".").keys(&sample).unwrap(), ["ab", "a.b"]);
}
