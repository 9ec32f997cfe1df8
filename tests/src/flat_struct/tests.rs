macro_rules! generate_tests {
    () => {
        mod tests {
            use super::{super::RawFd, Flat};
            use flatkeys::{prelude::*, Builder, Error};

            fn sample() -> Flat {
                Flat {
                    foo: String::from("foo"),
                    bar: 7,
                    baz: 1,
                    qux: true,
                    fd: RawFd(3),
                }
            }

            #[test]
            fn keys() {
                let flat = sample();
                assert_eq!(flatkeys::keys(&flat).unwrap(), ["foo", "bar", "fd"]);
            }

            #[test]
            fn keys_custom_tag() {
                let flat = sample();
                assert_eq!(Builder::new("k", "-").keys(&flat).unwrap(), ["f", "bar", "fd"]);
                assert_eq!(Builder::new("unknown", "").keys(&flat).unwrap(), ["foo", "bar", "fd"]);
            }

            #[test]
            fn values() {
                let flat = sample();
                let values = flatkeys::values(&flat).unwrap();
                assert_eq!(values.len(), 3);
                assert_eq!(values[0].downcast_ref::<String>().unwrap(), "foo");
                assert_eq!(values[1].downcast_ref::<i32>(), Some(&7));
                assert!(values[2].is_none());
                assert_eq!(format!("{:?}", values[2]), "<none>");
            }

            #[test]
            fn values_with_empty_values() {
                let flat = Flat {
                    foo: String::new(),
                    bar: 0,
                    baz: 0,
                    qux: false,
                    fd: RawFd(0),
                };
                let values = flatkeys::values(&flat).unwrap();
                assert_eq!(values[0].downcast_ref::<String>().unwrap(), "");
                assert_eq!(values[1].downcast_ref::<i32>(), Some(&0));
            }

            #[test]
            fn field_infos() {
                let flat = sample();
                let infos = flat.field_infos();
                assert_eq!(
                    infos.iter().map(|info| info.name).collect::<Vec<_>>(),
                    ["foo", "bar", "baz", "qux", "fd"]
                );
                assert_eq!(
                    infos.iter().map(|info| info.exported).collect::<Vec<_>>(),
                    [true, true, false, false, true]
                );
                assert_eq!(infos[0].tag("key"), Some("foo"));
                assert_eq!(infos[0].tag("k"), Some("f"));
                assert_eq!(infos[1].tag("key"), None);
            }

            #[test]
            fn field_values() {
                let flat = sample();
                assert!(flat.field_value(0).is_some());
                assert!(flat.field_value(1).is_some());
                assert!(flat.field_value(2).is_none());
                assert!(flat.field_value(3).is_none());
                assert!(flat.field_value(4).is_none());
                assert!(flat.field_value(5).is_none());
            }

            #[test]
            fn fields_iter() {
                let flat = sample();
                let record: &dyn Record = &flat;
                let fields = record.fields();
                assert_eq!(fields.len(), 5);
                assert_eq!(
                    fields.map(|field| field.value.is_some()).collect::<Vec<_>>(),
                    [true, true, false, false, false]
                );
            }

            #[test]
            fn some_reference() {
                let flat = sample();
                assert_eq!(flatkeys::keys(Some(&flat)).unwrap(), flatkeys::keys(&flat).unwrap());
            }

            #[test]
            fn by_value() {
                match flatkeys::keys(sample()) {
                    Err(Error::PtrRequired(value)) => assert!(value.starts_with("Flat {"), "{}", value),
                    other => panic!("unexpected result: {:?}", other),
                }
            }

            #[test]
            fn absent() {
                assert!(matches!(flatkeys::values(None::<&Flat>), Err(Error::InvalidValue(_))));
            }
        }
    };
}

pub(crate) use generate_tests;
