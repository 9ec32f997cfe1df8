use flatkeys::{Builder, Kind, Record};
use proptest::{option, prelude::*};

#[derive(Clone, Debug, Record)]
pub struct Tree {
    pub leaf: Option<u32>,
    pub left: Option<Box<Tree>>,
    pub right: Option<Box<Tree>>,
    #[flat(skip)]
    pub hidden: u8,
}

fn tree() -> impl Strategy<Value = Tree> {
    let leaf = (option::of(any::<u32>()), any::<u8>()).prop_map(|(leaf, hidden)| Tree {
        leaf,
        left: None,
        right: None,
        hidden,
    });
    leaf.prop_recursive(4, 32, 2, |inner| {
        (
            option::of(any::<u32>()),
            option::of(inner.clone()),
            option::of(inner),
            any::<u8>(),
        )
            .prop_map(|(leaf, left, right, hidden)| Tree {
                leaf,
                left: left.map(Box::new),
                right: right.map(Box::new),
                hidden,
            })
    })
}

/// Paths of flat entries, built directly from the tree shape.
fn paths(tree: &Tree, prefix: &str, out: &mut Vec<String>) {
    if tree.leaf.is_some() {
        out.push(format!("{}leaf", prefix));
    }
    for (name, child) in [("left", &tree.left), ("right", &tree.right)] {
        if let Some(child) = child {
            let path = format!("{}{}", prefix, name);
            let len = out.len();
            paths(child, &format!("{}.", path), out);
            if out.len() == len {
                out.push(path);
            }
        }
    }
}

proptest! {
    #[test]
    fn keys_follow_tree_shape(tree in tree()) {
        let mut expected = Vec::new();
        paths(&tree, "", &mut expected);
        prop_assert_eq!(Builder::new("key", ".").keys(&tree).unwrap(), expected);
    }

    #[test]
    fn keys_and_values_aligned(tree in tree(), delimiter in "[._/-]{0,2}") {
        let builder = Builder::new("key", delimiter);
        let keys = builder.keys(&tree).unwrap();
        let values = builder.values(&tree).unwrap();
        prop_assert_eq!(keys.len(), values.len());

        let entries = builder.entries(&tree).unwrap();
        prop_assert_eq!(entries.len(), keys.len());
        for ((key, value), (entry_key, entry_value)) in keys.iter().zip(&values).zip(&entries) {
            prop_assert_eq!(key, entry_key);
            prop_assert!(value.ptr_eq(entry_value));
        }
    }

    #[test]
    fn values_are_leaves_or_empty_records(tree in tree()) {
        for value in flatkeys::values(&tree).unwrap() {
            match value.kind() {
                Some(Kind::Uint) => prop_assert!(value.downcast_ref::<u32>().is_some()),
                Some(Kind::Struct) => {
                    let record = value.downcast_ref::<Tree>().unwrap();
                    prop_assert!(flatkeys::keys(record).unwrap().is_empty());
                }
                other => prop_assert!(false, "unexpected kind {:?}", other),
            }
        }
    }

    #[test]
    fn map_with_delimiter_is_lossless(tree in tree()) {
        let builder = Builder::new("key", ".");
        let keys = builder.keys(&tree).unwrap();
        let map = builder.map(&tree).unwrap();
        prop_assert_eq!(map.len(), keys.len());
        prop_assert!(flatkeys::map(&tree).unwrap().len() <= keys.len());
    }

    #[test]
    fn hidden_fields_ignored(tree in tree(), hidden in any::<u8>()) {
        let other = Tree { hidden, ..tree.clone() };
        prop_assert_eq!(flatkeys::keys(&tree).unwrap(), flatkeys::keys(&other).unwrap());
        prop_assert_eq!(tree.field_infos().len(), 4);
    }
}
