//region Index / Count

/// Creates a strongly-typed index wrapper around an integer type.
///
/// # Example
/// ```
/// use riskmatrix_structures::define_index;
///
/// define_index!(SlotIndex, u32, "Position of a slot");
///
/// let idx = SlotIndex::from(42u32);
/// assert_eq!(*idx, 42);
/// let raw: u32 = idx.into();
/// assert_eq!(raw, 42);
/// ```
#[macro_export]
macro_rules! define_index {
    ($name:ident, $inner:ty, $doc:expr) => {
        #[doc = $doc]
        #[repr(transparent)]
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name($inner);

        impl $name {
            // const constructor
            pub const fn from(var: $inner) -> Self {
                Self(var)
            }

            // const return method
            pub const fn get(&self) -> $inner {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                $name(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Creates a non-zero count type with validation.
///
/// # Example
/// ```
/// use riskmatrix_structures::{define_nonzero_count, RiskMatrixError};
///
/// define_nonzero_count!(ItemCount, u32, "Number of items (must be > 0)");
///
/// let count = ItemCount::new(5).unwrap();
/// assert_eq!(*count, 5);
///
/// let invalid = ItemCount::new(0);
/// assert!(invalid.is_err());
/// ```
#[macro_export]
macro_rules! define_nonzero_count {
    ($name:ident, $base:ty, $doc:expr) => {
        #[doc = $doc]
        #[repr(transparent)]
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name($base);

        impl $name {
            /// Creates a new instance, returns Err if validation fails
            pub fn new(value: $base) -> Result<Self, RiskMatrixError> {
                if value == 0 {
                    return Err(RiskMatrixError::Configuration(
                        "Count cannot be zero!".into(),
                    ));
                }
                Ok($name(value))
            }

            pub const fn get(&self) -> $base {
                self.0
            }
        }

        impl TryFrom<$base> for $name {
            type Error = RiskMatrixError;
            fn try_from(value: $base) -> Result<Self, RiskMatrixError> {
                $name::new(value)
            }
        }

        impl From<$name> for $base {
            fn from(value: $name) -> $base {
                value.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = $base;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

//endregion
