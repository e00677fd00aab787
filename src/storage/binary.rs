//! Binary persistence: a fixed-shape record stream encoded with
//! bincode. Record order is preserved, so lossy folds see records in
//! stored order.

use std::fs;
use std::path::Path;

use crate::storage::PointRecord;
use crate::{Error, Result};

/// Encode records into the binary stream form.
pub fn encode(records: &[PointRecord]) -> Result<Vec<u8>> {
    bincode::serialize(records).map_err(|err| Error::Codec(err.to_string()))
}

/// Decode a binary stream back into records.
pub fn decode(bytes: &[u8]) -> Result<Vec<PointRecord>> {
    bincode::deserialize(bytes).map_err(|err| Error::Codec(err.to_string()))
}

/// Write the record stream to `path`.
pub fn save<P: AsRef<Path>>(path: P, records: &[PointRecord]) -> Result<()> {
    fs::write(path, encode(records)?)?;
    Ok(())
}

/// Load the record stream at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<PointRecord>> {
    let bytes = fs::read(&path)?;
    let records = decode(&bytes)?;
    log::debug!(
        "loaded {} records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AntennaRegistry;

    #[test]
    fn encode_preserves_record_order() {
        let records = vec![
            PointRecord {
                freq: 'B',
                x: 9,
                y: 0,
            },
            PointRecord {
                freq: 'A',
                x: 0,
                y: 9,
            },
        ];

        let decoded = decode(&encode(&records).unwrap()).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn garbage_bytes_are_a_codec_error() {
        let err = decode(&[0xFF, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, Error::Codec(_)));
    }

    #[test]
    fn decoded_out_of_bounds_records_are_dropped_at_fold_time() {
        let records = vec![
            PointRecord {
                freq: 'A',
                x: 1,
                y: 1,
            },
            PointRecord {
                freq: 'A',
                x: -7,
                y: 1,
            },
        ];
        let decoded = decode(&encode(&records).unwrap()).unwrap();

        let mut registry = AntennaRegistry::new();
        let kept = registry.extend_lossy(decoded.into_iter().map(Into::into));
        assert_eq!(kept, 1);
        assert_eq!(registry.len(), 1);
    }
}
