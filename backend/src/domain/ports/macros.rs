//! Helper macro for declaring port error enums.

/// Declare a `thiserror`-backed port error enum with snake_case constructor
/// functions that accept `impl Into<FieldType>` arguments.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    /// Variant constructor accepting `Into` conversions.
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        /// Exercise enum for the macro itself.
        pub enum SamplePortError {
            /// Single string field.
            Broken { message: String } => "broken: {message}",
            /// Mixed field types.
            Refused { message: String, attempts: u32 } => "refused: {message} after {attempts}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SamplePortError::broken("oh no");
        assert_eq!(err.to_string(), "broken: oh no");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = SamplePortError::refused("busy", 3_u32);
        assert_eq!(err.to_string(), "refused: busy after 3");
    }
}
