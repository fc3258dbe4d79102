//! The `union_type!` definition macro

/// Define a closed tagged union.
///
/// ```text
/// union_type! {
///     <attributes and docs>
///     <vis> enum <Name><Generics> as "<namespace>:<Name>" {
///         <Variant>(<field>: <Type>, ...),
///         ...
///     }
///     derive(<Derivation>, ...);
/// }
/// ```
///
/// Each variant becomes a tuple variant of a native enum, so `Name::Variant` is an
/// ordinary constructor function and `match` is exhaustive. The field names are kept in
/// the union's [`UnionType`](crate::adt::UnionType) for the derivations.
///
/// Available derivations, installed once for the whole union:
/// - `Equality`: `PartialEq`, same variant and pairwise-equal fields
/// - `TotalEquality`: `Eq`, when every field type is `Eq`
/// - `DebugRepresentation`: `Debug` and `Display` as `Name.Variant(field: value, ...)`
/// - `Serialization`: [`Serialization`](crate::adt::Serialization) and
///   [`Deserialization`](crate::adt::Deserialization) plus serde `Serialize`/`Deserialize`,
///   all using the `@@type`/`@@tag`/`values` envelope
///
/// Generic parameters receive the bound each derivation needs (`PartialEq`, `Debug`,
/// `Serialize` for encoding, `DeserializeOwned` for decoding), the same way `#[derive]`
/// bounds them. They must be plain type parameters: lifetimes, const generics and inline
/// bounds are not accepted, so a borrowed payload is expressed by instantiating a type
/// parameter with a reference (`Lookup<&str>`).
///
/// Each union is identified in memory by its own [`UnionType`](crate::adt::UnionType)
/// static, so membership tests never confuse two unions. The type id string is only the
/// wire identity used by `Serialization`; give every union a distinct one, since an
/// envelope carries nothing else to tell two unions with the same id apart.
///
/// A definition with no variants, a repeated variant name, or a repeated field name
/// fails to compile:
///
/// ```compile_fail
/// unionkit::union_type! {
///     enum Segment as "demo:Segment" {
///         Line(x: i32, x: i32),
///     }
/// }
/// ```
///
/// ```compile_fail
/// unionkit::union_type! {
///     enum Segment as "demo:Segment" {
///         Line(length: u32),
///         Line(length: u32),
///     }
/// }
/// ```
///
/// ```compile_fail
/// unionkit::union_type! {
///     enum Nothing as "demo:Nothing" {}
/// }
/// ```
///
/// So does a derivation the macro does not know:
///
/// ```compile_fail
/// unionkit::union_type! {
///     enum Segment as "demo:Segment" {
///         Line(length: u32),
///     }
///     derive(Ordering);
/// }
/// ```
///
/// and a lifetime parameter:
///
/// ```compile_fail
/// unionkit::union_type! {
///     enum Borrowed<'a> as "demo:Borrowed" {
///         Text(value: &'a str),
///     }
/// }
/// ```
///
/// # Example
///
/// ```
/// use unionkit::union_type;
///
/// union_type! {
///     #[derive(Clone, Copy)]
///     pub enum Shape as "demo:Shape" {
///         Circle(radius: f64),
///         Rect(width: f64, height: f64),
///     }
///     derive(Equality, DebugRepresentation);
/// }
///
/// let rect = Shape::Rect(2.0, 3.0);
/// assert!(rect.is_rect());
/// assert_eq!(rect, Shape::Rect(2.0, 3.0));
/// assert_eq!(format!("{rect}"), "Shape.Rect(width: 2.0, height: 3.0)");
/// ```
#[macro_export]
macro_rules! union_type {
    (@parse [$($meta:tt)*] [$vis:vis] $name:ident $generics:tt $type_id:literal $body:tt
        [$($derivation:ident)*]
    ) => {
        $crate::union_type!(@enum [$($meta)*] [$vis] $name $generics $body);
        $crate::union_type!(@core $name $generics $type_id $body);
        $( $crate::union_type!(@derive $derivation $name $generics $body); )*
    };

    (@enum [$($meta:tt)*] [$vis:vis] $name:ident [$($gen:ident),*]
        { $( $(#[$vmeta:meta])* $variant:ident ( $($field:ident : $fty:ty),* $(,)? ) ),+ $(,)? }
    ) => {
        $($meta)*
        $vis enum $name<$($gen),*> {
            $( $(#[$vmeta])* $variant($($fty),*), )+
        }
    };

    (@core $name:ident [$($gen:ident),*] $type_id:literal
        { $( $(#[$vmeta:meta])* $variant:ident ( $($field:ident : $fty:ty),* $(,)? ) ),+ $(,)? }
    ) => {
        const _: () = {
            #[allow(dead_code)]
            enum Tag {
                $($variant,)+
            }

            const VARIANTS: &[$crate::adt::VariantDescriptor] = &[
                $(
                    $crate::adt::VariantDescriptor::new(
                        ::core::stringify!($variant),
                        $type_id,
                        &[$(::core::stringify!($field)),*],
                    ),
                )+
            ];

            static UNION_TYPE: $crate::adt::UnionType =
                $crate::adt::UnionType::new(::core::stringify!($name), $type_id, VARIANTS);

            impl<$($gen),*> $crate::adt::Adt for $name<$($gen),*> {
                const UNION: &'static $crate::adt::UnionType = &UNION_TYPE;

                #[inline]
                fn variant_index(&self) -> usize {
                    match self {
                        $( Self::$variant(..) => Tag::$variant as usize, )+
                    }
                }
            }
        };

        $crate::__private::paste! {
            impl<$($gen),*> $name<$($gen),*> {
                $(
                    #[doc = ::core::concat!("Returns `true` if this is a `", ::core::stringify!($variant), "`.")]
                    #[inline]
                    pub fn [<is_ $variant:snake>](&self) -> bool {
                        ::core::matches!(self, Self::$variant(..))
                    }
                )+
            }
        }
    };

    (@derive Equality $name:ident [$($gen:ident),*]
        { $( $(#[$vmeta:meta])* $variant:ident ( $($field:ident : $fty:ty),* $(,)? ) ),+ $(,)? }
    ) => {
        $crate::__private::paste! {
            impl<$($gen: ::core::cmp::PartialEq),*> ::core::cmp::PartialEq for $name<$($gen),*> {
                #[allow(unreachable_patterns, clippy::nonminimal_bool)]
                fn eq(&self, other: &Self) -> bool {
                    match (self, other) {
                        $(
                            (Self::$variant($($field),*), Self::$variant($([<__rhs_ $field>]),*)) => {
                                true $(&& $field == [<__rhs_ $field>])*
                            }
                        )+
                        _ => false,
                    }
                }
            }
        }
    };

    (@derive TotalEquality $name:ident [$($gen:ident),*]
        { $( $(#[$vmeta:meta])* $variant:ident ( $($field:ident : $fty:ty),* $(,)? ) ),+ $(,)? }
    ) => {
        impl<$($gen: ::core::cmp::Eq),*> ::core::cmp::Eq for $name<$($gen),*> {}

        const _: () = {
            #[allow(dead_code)]
            fn assert_fields_are_eq<$($gen: ::core::cmp::Eq),*>() {
                fn is_eq<T: ?::core::marker::Sized + ::core::cmp::Eq>() {}
                $($( is_eq::<$fty>(); )*)+
            }
        };
    };

    (@derive DebugRepresentation $name:ident [$($gen:ident),*]
        { $( $(#[$vmeta:meta])* $variant:ident ( $($field:ident : $fty:ty),* $(,)? ) ),+ $(,)? }
    ) => {
        impl<$($gen: ::core::fmt::Debug),*> ::core::fmt::Debug for $name<$($gen),*> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    $(
                        Self::$variant($($field),*) => $crate::adt::derive::write_repr(
                            f,
                            <Self as $crate::adt::Adt>::UNION.name(),
                            ::core::stringify!($variant),
                            &[$((::core::stringify!($field), $field as &dyn ::core::fmt::Debug)),*],
                        ),
                    )+
                }
            }
        }

        impl<$($gen: ::core::fmt::Debug),*> ::core::fmt::Display for $name<$($gen),*> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    };

    (@derive Serialization $name:ident [$($gen:ident),*]
        { $( $(#[$vmeta:meta])* $variant:ident ( $($field:ident : $fty:ty),* $(,)? ) ),+ $(,)? }
    ) => {
        impl<$($gen),*> $crate::adt::Serialization for $name<$($gen),*>
        where
            $($gen: $crate::__private::serde::Serialize,)*
        {
            fn to_json(
                &self,
            ) -> ::core::result::Result<$crate::__private::serde_json::Value, $crate::adt::AdtError> {
                let variant = <Self as $crate::adt::Adt>::variant(self);
                #[allow(unused_mut)]
                let mut values = $crate::adt::serialization::Fields::new(
                    <Self as $crate::adt::Adt>::UNION,
                    variant,
                );
                match self {
                    $(
                        Self::$variant($($field),*) => {
                            $( values.insert(::core::stringify!($field), $field)?; )*
                        }
                    )+
                }
                ::core::result::Result::Ok(values.into_envelope())
            }
        }

        impl<$($gen),*> $crate::adt::Deserialization for $name<$($gen),*>
        where
            $($gen: $crate::__private::serde::de::DeserializeOwned,)*
        {
            fn from_json(
                value: &$crate::__private::serde_json::Value,
            ) -> ::core::result::Result<Self, $crate::adt::AdtError> {
                let envelope = $crate::adt::serialization::Envelope::open(
                    <Self as $crate::adt::Adt>::UNION,
                    value,
                )?;
                $(
                    if envelope.variant().name() == ::core::stringify!($variant) {
                        return ::core::result::Result::Ok(Self::$variant(
                            $(envelope.field(::core::stringify!($field))?),*
                        ));
                    }
                )+
                ::core::result::Result::Err(envelope.unknown_variant())
            }
        }

        impl<$($gen),*> $crate::__private::serde::Serialize for $name<$($gen),*>
        where
            $($gen: $crate::__private::serde::Serialize,)*
        {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                let json = $crate::adt::Serialization::to_json(self)
                    .map_err(<S::Error as $crate::__private::serde::ser::Error>::custom)?;
                $crate::__private::serde::Serialize::serialize(&json, serializer)
            }
        }

        impl<'de, $($gen),*> $crate::__private::serde::Deserialize<'de> for $name<$($gen),*>
        where
            $($gen: $crate::__private::serde::de::DeserializeOwned,)*
        {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let json = <$crate::__private::serde_json::Value as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                $crate::adt::Deserialization::from_json(&json)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };

    (@derive $unknown:ident $name:ident $generics:tt $body:tt) => {
        ::core::compile_error!(::core::concat!(
            "unknown derivation `",
            ::core::stringify!($unknown),
            "`; expected Equality, TotalEquality, DebugRepresentation or Serialization"
        ));
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident < $($gen:ident),+ $(,)? > as $type_id:literal $body:tt
        $(derive($($derivation:ident),* $(,)?);)?
    ) => {
        $crate::union_type!(@parse [$(#[$meta])*] [$vis] $name [$($gen),+] $type_id $body
            [$($($derivation)*)?]);
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $type_id:literal $body:tt
        $(derive($($derivation:ident),* $(,)?);)?
    ) => {
        $crate::union_type!(@parse [$(#[$meta])*] [$vis] $name [] $type_id $body
            [$($($derivation)*)?]);
    };
}
