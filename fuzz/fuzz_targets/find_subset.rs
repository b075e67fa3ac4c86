use entrysum::{find_subset, SubsetSize, ValueSet};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 9 {
                return;
            }
            let size = if data[0] & 1 == 0 { SubsetSize::Pair } else { SubsetSize::Triple };
            let mut target = [0u8; 8];
            target.copy_from_slice(&data[1..9]);
            let target = i64::from_le_bytes(target);
            let values = ValueSet::new(data[9..].chunks(2).map(|c| {
                i16::from_le_bytes([c[0], *c.get(1).unwrap_or(&0)]) as i64
            }));
            if let Some(found) = find_subset(&values, target, size) {
                assert_eq!(found.len(), size.get());
                assert_eq!(found.sum(), target as i128);
                assert!(found.values().iter().all(|&v| values.contains(v)));
            }
        });
    }
}
