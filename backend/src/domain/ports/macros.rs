//! Helper macro generating port error enums with `thiserror` messages and
//! snake_case constructors for each variant.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum ExamplePortError {
            Unreachable => "store unreachable",
            Query { message: String } => "query failed: {message}",
            Limit { limit: usize } => "limit exceeded: {limit}",
            Decode { collection: String, count: u32 } => "decode {collection} ({count})",
        }
    }

    #[test]
    fn unit_variants_get_constructors() {
        let err = ExamplePortError::unreachable();
        assert_eq!(err.to_string(), "store unreachable");
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::query("timeout");
        assert_eq!(err.to_string(), "query failed: timeout");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExamplePortError::limit(1000_usize);
        assert_eq!(err.to_string(), "limit exceeded: 1000");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExamplePortError::decode("items", 2_u32);
        assert_eq!(err.to_string(), "decode items (2)");
    }
}
