//! Shared checks for record tests

use mercury_core::{store_from_be_bytes, store_to_be_bytes, PackedRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decode random buffers and check that re-encoding returns them with only
/// the reserved bits cleared
pub(crate) fn assert_reencodes_random<R: PackedRecord>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..500 {
        let mut bytes = vec![0u8; R::LENGTH];
        rng.fill(bytes.as_mut_slice());

        let store: R::Store = store_from_be_bytes(&bytes).unwrap();
        let mut expected = vec![0u8; R::LENGTH];
        store_to_be_bytes(store & !R::RESERVED_MASK, &mut expected).unwrap();

        let record = R::decode(&bytes).unwrap();
        assert_eq!(record.encode(), expected, "{} from {:02X?}", R::NAME, bytes);
    }
}
