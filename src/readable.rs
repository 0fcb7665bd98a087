//! Declared-field records.
//!
//! [`json_readable!`](crate::json_readable) implements `Serialize` and
//! `Deserialize` for a struct using an explicit list of field names. Fields
//! left off the list never reach the document and are never read back.

/// Implements `Serialize` and `Deserialize` for `Type` over the listed fields.
///
/// The type must implement `Default`. Deserialization starts from
/// `Type::default()`, fills each listed field present in the object, and
/// ignores unknown keys. Listed fields missing from the object keep their
/// default value. Records deserialize as structs, so
/// [`ConfigReader::get_into`](crate::ConfigReader::get_into) keeps the current
/// value of every listed field the document lacks.
///
/// ```
/// use config_reader::{json_readable, ConfigReader};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Params {
///     param1: i32,
///     param2: f32,
///     enabled: bool,
/// }
///
/// json_readable!(Params { param1, param2 });
///
/// let mut config = ConfigReader::new();
/// config.set(&Params { param1: 42, param2: 3.5, enabled: true }, "Params")?;
/// assert_eq!(config.write_to_string()?, r#"{"Params":{"param1":42,"param2":3.5}}"#);
///
/// let params: Params = config.get("Params")?;
/// assert_eq!(params, Params { param1: 42, param2: 3.5, enabled: false });
/// # Ok::<(), config_reader::ConfigError>(())
/// ```
#[macro_export]
macro_rules! json_readable {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::__private::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                use $crate::__private::serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(::core::option::Option::None)?;
                $(
                    map.serialize_entry(::core::stringify!($field), &self.$field)?;
                )+
                map.end()
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                struct RecordVisitor;

                impl<'de> $crate::__private::serde::de::Visitor<'de> for RecordVisitor {
                    type Value = $ty;

                    fn expecting(
                        &self,
                        formatter: &mut ::core::fmt::Formatter,
                    ) -> ::core::fmt::Result {
                        formatter.write_str(::core::concat!("struct ", ::core::stringify!($ty)))
                    }

                    fn visit_map<A>(self, mut map: A) -> ::core::result::Result<$ty, A::Error>
                    where
                        A: $crate::__private::serde::de::MapAccess<'de>,
                    {
                        let mut record = <$ty as ::core::default::Default>::default();
                        while let ::core::option::Option::Some(key) =
                            map.next_key::<::std::string::String>()?
                        {
                            match key.as_str() {
                                $(
                                    ::core::stringify!($field) => {
                                        record.$field = map.next_value()?;
                                    }
                                )+
                                _ => {
                                    map.next_value::<$crate::__private::serde::de::IgnoredAny>()?;
                                }
                            }
                        }
                        ::core::result::Result::Ok(record)
                    }
                }

                const FIELDS: &[&str] = &[$(::core::stringify!($field)),+];
                deserializer.deserialize_struct(::core::stringify!($ty), FIELDS, RecordVisitor)
            }
        }
    };
}
