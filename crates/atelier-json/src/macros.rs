//! The `dto!` record generator.
//!
//! Every wire record in the workspace is one invocation of [`dto!`] over a
//! field list. Each field names its wire key, its Rust field, and a kind:
//!
//! ```
//! atelier_json::dto! {
//!     /// A git tag.
//!     pub struct Tag {
//!         name: (string) = "name",
//!     }
//! }
//!
//! let tag = Tag::new().with_name("v1.0");
//! assert_eq!(tag.name(), Some("v1.0"));
//! ```
//!
//! Kinds: `string`, `int`, `float`, `bool`, `any`, `dto T`, `list string`,
//! `list int`, `list dto T`, `map string`, `map list string`, `map dto T`.
//!
//! The expansion produces the struct (private fields), a getter, `set_*`
//! and fluent `with_*` per field, an `is_*` predicate for bools, a `*_mut`
//! accessor for collections, `FromJson`/`ToJson` impls, and a serde bridge
//! that routes `Serialize`/`Deserialize` through the same truthy gate.

/// Declares one wire record from its field list.
#[macro_export]
macro_rules! dto {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : ( $($kind:tt)+ ) = $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $( $field: $crate::dto_field_ty!($($kind)+), )+
        }

        impl $name {
            /// Blank record: every field unset, every list empty.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $crate::dto_accessors! { $(#[$field_meta])* $field : $($kind)+ }
            )+
        }

        impl $crate::FromJson for $name {
            fn from_json(value: &$crate::serde_json::Value) -> Self {
                let mut dto = Self::default();
                if let $crate::serde_json::Value::Object(src) = value {
                    $( $crate::dto_hydrate!(src, $key => dto.$field ; $($kind)+); )+
                }
                dto
            }
        }

        impl $crate::ToJson for $name {
            fn to_json(&self) -> $crate::serde_json::Value {
                let mut out = $crate::JsonObject::new();
                $( $crate::dto_emit!(out, $key, self.$field ; $($kind)+); )+
                $crate::serde_json::Value::Object(out)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                $crate::serde::Serialize::serialize(&$crate::ToJson::to_json(self), serializer)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let value = <$crate::serde_json::Value as $crate::serde::Deserialize>::deserialize(deserializer)?;
                Ok(<Self as $crate::FromJson>::from_json(&value))
            }
        }
    };
}

/// Rust representation of a field kind.
#[doc(hidden)]
#[macro_export]
macro_rules! dto_field_ty {
    (string) => { Option<String> };
    (int) => { Option<i64> };
    (float) => { Option<f64> };
    (bool) => { Option<bool> };
    (any) => { Option<$crate::serde_json::Value> };
    (dto $t:ty) => { Option<$t> };
    (list $($elem:tt)+) => { Vec<$crate::dto_elem_ty!($($elem)+)> };
    (map $($val:tt)+) => {
        Option<::std::collections::BTreeMap<String, $crate::dto_elem_ty!($($val)+)>>
    };
}

/// Element type of a list kind, or value type of a map kind.
#[doc(hidden)]
#[macro_export]
macro_rules! dto_elem_ty {
    (string) => { String };
    (int) => { i64 };
    (list string) => { Vec<String> };
    (dto $t:ty) => { $t };
}

/// Accessor set for one field.
#[doc(hidden)]
#[macro_export]
macro_rules! dto_accessors {
    ($(#[$m:meta])* $field:ident : string) => {
        $crate::paste::paste! {
            $(#[$m])*
            #[must_use]
            pub fn $field(&self) -> Option<&str> {
                self.$field.as_deref()
            }

            pub fn [<set_ $field>](&mut self, value: impl Into<String>) {
                self.$field = Some(value.into());
            }

            #[must_use]
            pub fn [<with_ $field>](mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        }
    };

    ($(#[$m:meta])* $field:ident : int) => {
        $crate::paste::paste! {
            $(#[$m])*
            #[must_use]
            pub fn $field(&self) -> Option<i64> {
                self.$field
            }

            pub fn [<set_ $field>](&mut self, value: i64) {
                self.$field = Some(value);
            }

            #[must_use]
            pub fn [<with_ $field>](mut self, value: i64) -> Self {
                self.$field = Some(value);
                self
            }
        }
    };

    ($(#[$m:meta])* $field:ident : float) => {
        $crate::paste::paste! {
            $(#[$m])*
            #[must_use]
            pub fn $field(&self) -> Option<f64> {
                self.$field
            }

            pub fn [<set_ $field>](&mut self, value: f64) {
                self.$field = Some(value);
            }

            #[must_use]
            pub fn [<with_ $field>](mut self, value: f64) -> Self {
                self.$field = Some(value);
                self
            }
        }
    };

    ($(#[$m:meta])* $field:ident : bool) => {
        $crate::paste::paste! {
            $(#[$m])*
            #[must_use]
            pub fn $field(&self) -> Option<bool> {
                self.$field
            }

            /// `true` when the field is set and truthy.
            #[must_use]
            pub fn [<is_ $field>](&self) -> bool {
                self.$field.unwrap_or(false)
            }

            pub fn [<set_ $field>](&mut self, value: bool) {
                self.$field = Some(value);
            }

            #[must_use]
            pub fn [<with_ $field>](mut self, value: bool) -> Self {
                self.$field = Some(value);
                self
            }
        }
    };

    ($(#[$m:meta])* $field:ident : any) => {
        $crate::paste::paste! {
            $(#[$m])*
            #[must_use]
            pub fn $field(&self) -> Option<&$crate::serde_json::Value> {
                self.$field.as_ref()
            }

            pub fn [<set_ $field>](&mut self, value: impl Into<$crate::serde_json::Value>) {
                self.$field = Some(value.into());
            }

            #[must_use]
            pub fn [<with_ $field>](mut self, value: impl Into<$crate::serde_json::Value>) -> Self {
                self.$field = Some(value.into());
                self
            }
        }
    };

    ($(#[$m:meta])* $field:ident : dto $t:ty) => {
        $crate::paste::paste! {
            $(#[$m])*
            #[must_use]
            pub fn $field(&self) -> Option<&$t> {
                self.$field.as_ref()
            }

            pub fn [<set_ $field>](&mut self, value: $t) {
                self.$field = Some(value);
            }

            #[must_use]
            pub fn [<with_ $field>](mut self, value: $t) -> Self {
                self.$field = Some(value);
                self
            }
        }
    };

    ($(#[$m:meta])* $field:ident : list $($elem:tt)+) => {
        $crate::paste::paste! {
            $(#[$m])*
            #[must_use]
            pub fn $field(&self) -> &[$crate::dto_elem_ty!($($elem)+)] {
                &self.$field
            }

            pub fn [<$field _mut>](&mut self) -> &mut Vec<$crate::dto_elem_ty!($($elem)+)> {
                &mut self.$field
            }

            pub fn [<set_ $field>](&mut self, value: Vec<$crate::dto_elem_ty!($($elem)+)>) {
                self.$field = value;
            }

            #[must_use]
            pub fn [<with_ $field>](mut self, value: Vec<$crate::dto_elem_ty!($($elem)+)>) -> Self {
                self.$field = value;
                self
            }
        }
    };

    ($(#[$m:meta])* $field:ident : map $($val:tt)+) => {
        $crate::paste::paste! {
            $(#[$m])*
            #[must_use]
            pub fn $field(
                &self,
            ) -> Option<&::std::collections::BTreeMap<String, $crate::dto_elem_ty!($($val)+)>> {
                self.$field.as_ref()
            }

            /// Mutable access; creates the map when it is still unset.
            pub fn [<$field _mut>](
                &mut self,
            ) -> &mut ::std::collections::BTreeMap<String, $crate::dto_elem_ty!($($val)+)> {
                self.$field.get_or_insert_with(::std::collections::BTreeMap::new)
            }

            pub fn [<set_ $field>](
                &mut self,
                value: ::std::collections::BTreeMap<String, $crate::dto_elem_ty!($($val)+)>,
            ) {
                self.$field = Some(value);
            }

            #[must_use]
            pub fn [<with_ $field>](
                mut self,
                value: ::std::collections::BTreeMap<String, $crate::dto_elem_ty!($($val)+)>,
            ) -> Self {
                self.$field = Some(value);
                self
            }
        }
    };
}

/// Hydration statement for one field.
#[doc(hidden)]
#[macro_export]
macro_rules! dto_hydrate {
    ($src:expr, $key:literal => $slot:expr ; string) => {
        $slot = $crate::hydrate::string($src, $key);
    };
    ($src:expr, $key:literal => $slot:expr ; int) => {
        $slot = $crate::hydrate::int($src, $key);
    };
    ($src:expr, $key:literal => $slot:expr ; float) => {
        $slot = $crate::hydrate::float($src, $key);
    };
    ($src:expr, $key:literal => $slot:expr ; bool) => {
        $slot = $crate::hydrate::boolean($src, $key);
    };
    ($src:expr, $key:literal => $slot:expr ; any) => {
        $slot = $crate::hydrate::any($src, $key);
    };
    ($src:expr, $key:literal => $slot:expr ; dto $t:ty) => {
        $slot = $crate::hydrate::record::<$t>($src, $key);
    };
    ($src:expr, $key:literal => $slot:expr ; list string) => {
        $slot = $crate::hydrate::string_list($src, $key);
    };
    ($src:expr, $key:literal => $slot:expr ; list int) => {
        $slot = $crate::hydrate::int_list($src, $key);
    };
    ($src:expr, $key:literal => $slot:expr ; list dto $t:ty) => {
        $slot = $crate::hydrate::record_list::<$t>($src, $key);
    };
    ($src:expr, $key:literal => $slot:expr ; map string) => {
        $slot = $crate::hydrate::string_map($src, $key);
    };
    ($src:expr, $key:literal => $slot:expr ; map list string) => {
        $slot = $crate::hydrate::string_list_map($src, $key);
    };
    ($src:expr, $key:literal => $slot:expr ; map dto $t:ty) => {
        $slot = $crate::hydrate::record_map::<$t>($src, $key);
    };
}

/// Emission statement for one field.
#[doc(hidden)]
#[macro_export]
macro_rules! dto_emit {
    ($out:expr, $key:literal, $field:expr ; string) => {
        $crate::emit::string(&mut $out, $key, $field.as_ref());
    };
    ($out:expr, $key:literal, $field:expr ; int) => {
        $crate::emit::int(&mut $out, $key, $field);
    };
    ($out:expr, $key:literal, $field:expr ; float) => {
        $crate::emit::float(&mut $out, $key, $field);
    };
    ($out:expr, $key:literal, $field:expr ; bool) => {
        $crate::emit::boolean(&mut $out, $key, $field);
    };
    ($out:expr, $key:literal, $field:expr ; any) => {
        $crate::emit::any(&mut $out, $key, $field.as_ref());
    };
    ($out:expr, $key:literal, $field:expr ; dto $t:ty) => {
        $crate::emit::record(&mut $out, $key, $field.as_ref());
    };
    ($out:expr, $key:literal, $field:expr ; list string) => {
        $crate::emit::string_list(&mut $out, $key, &$field);
    };
    ($out:expr, $key:literal, $field:expr ; list int) => {
        $crate::emit::int_list(&mut $out, $key, &$field);
    };
    ($out:expr, $key:literal, $field:expr ; list dto $t:ty) => {
        $crate::emit::record_list(&mut $out, $key, &$field);
    };
    ($out:expr, $key:literal, $field:expr ; map string) => {
        $crate::emit::string_map(&mut $out, $key, $field.as_ref());
    };
    ($out:expr, $key:literal, $field:expr ; map list string) => {
        $crate::emit::string_list_map(&mut $out, $key, $field.as_ref());
    };
    ($out:expr, $key:literal, $field:expr ; map dto $t:ty) => {
        $crate::emit::record_map(&mut $out, $key, $field.as_ref());
    };
}
