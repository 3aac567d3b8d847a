//! Helper macro for port error enums.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor whose
//! parameters accept anything convertible into the field type, so adapters
//! can write `BookPersistenceError::query(err.to_string())`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
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
        pub enum ShelfError {
            Offline => "shelf offline",
            Missing { shelf: String } => "shelf {shelf} missing",
            Overfull { shelf: String, capacity: u32 } => "shelf {shelf} holds at most {capacity}",
        }
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(ShelfError::offline(), ShelfError::Offline);
        assert_eq!(ShelfError::offline().to_string(), "shelf offline");
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(ShelfError::missing("fiction").to_string(), "shelf fiction missing");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = ShelfError::overfull("poetry", 12_u32);
        assert_eq!(
            err,
            ShelfError::Overfull {
                shelf: "poetry".to_owned(),
                capacity: 12
            }
        );
        assert_eq!(err.to_string(), "shelf poetry holds at most 12");
    }
}
