//! Helper macros for records backed by a single integer store

/// Implement [`PackedRecord`](mercury_core::PackedRecord) and the store
/// conversions for a struct with a single `raw` field
///
/// Every conversion from a store keeps only the record bits, so an instance
/// never carries reserved bits or padding above `LENGTH * 8`.
macro_rules! packed_record {
    ($name:ident, $store:ty, $len:expr) => {
        packed_record!($name, $store, $len, 0);
    };
    ($name:ident, $store:ty, $len:expr, $reserved:expr) => {
        impl mercury_core::PackedRecord for $name {
            const NAME: &'static str = stringify!($name);
            const LENGTH: usize = $len;
            type Store = $store;
            const RESERVED_MASK: $store = $reserved;

            fn from_store(store: $store) -> Self {
                Self {
                    raw: store & <Self as mercury_core::PackedRecord>::record_mask(),
                }
            }

            fn store(&self) -> $store {
                self.raw
            }
        }

        impl From<$store> for $name {
            fn from(raw: $store) -> Self {
                <Self as mercury_core::PackedRecord>::from_store(raw)
            }
        }

        impl From<$name> for $store {
            fn from(record: $name) -> $store {
                record.raw
            }
        }
    };
}

pub(crate) use packed_record;
