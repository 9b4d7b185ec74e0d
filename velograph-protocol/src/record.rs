//! Telemetry record encoding and decoding
//!
//! The record is recomputed every sampling tick and handed off immediately;
//! it is never persisted between ticks. The firmware only encodes - decode
//! exists for host-side tooling and tests.

/// Size of an encoded record in bytes
pub const RECORD_SIZE: usize = 18;

// Field offsets within the encoded record
const OFFSET_SPEED_MPS: usize = 0;
const OFFSET_SPEED_KPH: usize = 4;
const OFFSET_RPM: usize = 8;
const OFFSET_AUXILIARY: usize = 12;
const OFFSET_TIMESTAMP: usize = 14;

/// Errors that can occur when decoding a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// Input shorter than [`RECORD_SIZE`]
    Truncated,
}

/// One broadcast telemetry sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryRecord {
    /// Linear speed in meters per second
    pub speed_mps: f32,
    /// Linear speed in kilometers per hour (derived, always `speed_mps * 3.6`)
    pub speed_kph: f32,
    /// Wheel revolutions per minute
    pub rpm: f32,
    /// Auxiliary analog reading, raw ADC counts (e.g. 0-4095)
    pub auxiliary_raw: u16,
    /// Sample timestamp, milliseconds since startup
    pub timestamp_ms: u32,
}

impl TelemetryRecord {
    /// Encode into the fixed 18-byte wire layout
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[OFFSET_SPEED_MPS..OFFSET_SPEED_KPH].copy_from_slice(&self.speed_mps.to_le_bytes());
        buf[OFFSET_SPEED_KPH..OFFSET_RPM].copy_from_slice(&self.speed_kph.to_le_bytes());
        buf[OFFSET_RPM..OFFSET_AUXILIARY].copy_from_slice(&self.rpm.to_le_bytes());
        buf[OFFSET_AUXILIARY..OFFSET_TIMESTAMP].copy_from_slice(&self.auxiliary_raw.to_le_bytes());
        buf[OFFSET_TIMESTAMP..RECORD_SIZE].copy_from_slice(&self.timestamp_ms.to_le_bytes());
        buf
    }

    /// Decode from a byte slice
    pub fn decode(bytes: &[u8]) -> Result<Self, RecordError> {
        if bytes.len() < RECORD_SIZE {
            return Err(RecordError::Truncated);
        }

        // Slice-to-array conversions cannot fail after the length check
        let f32_at = |offset: usize| {
            let mut b = [0u8; 4];
            b.copy_from_slice(&bytes[offset..offset + 4]);
            f32::from_le_bytes(b)
        };

        let mut aux = [0u8; 2];
        aux.copy_from_slice(&bytes[OFFSET_AUXILIARY..OFFSET_TIMESTAMP]);
        let mut ts = [0u8; 4];
        ts.copy_from_slice(&bytes[OFFSET_TIMESTAMP..RECORD_SIZE]);

        Ok(Self {
            speed_mps: f32_at(OFFSET_SPEED_MPS),
            speed_kph: f32_at(OFFSET_SPEED_KPH),
            rpm: f32_at(OFFSET_RPM),
            auxiliary_raw: u16::from_le_bytes(aux),
            timestamp_ms: u32::from_le_bytes(ts),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TelemetryRecord {
        TelemetryRecord {
            speed_mps: 0.42,
            speed_kph: 1.512,
            rpm: 120.0,
            auxiliary_raw: 2048,
            timestamp_ms: 123_456,
        }
    }

    #[test]
    fn test_encoded_layout() {
        let buf = sample().encode();

        assert_eq!(buf.len(), RECORD_SIZE);
        assert_eq!(&buf[0..4], &0.42f32.to_le_bytes());
        assert_eq!(&buf[4..8], &1.512f32.to_le_bytes());
        assert_eq!(&buf[8..12], &120.0f32.to_le_bytes());
        assert_eq!(&buf[12..14], &2048u16.to_le_bytes());
        assert_eq!(&buf[14..18], &123_456u32.to_le_bytes());
    }

    #[test]
    fn test_roundtrip() {
        let original = sample();
        let decoded = TelemetryRecord::decode(&original.encode()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_truncated_input() {
        let buf = sample().encode();
        assert_eq!(
            TelemetryRecord::decode(&buf[..RECORD_SIZE - 1]),
            Err(RecordError::Truncated)
        );
        assert_eq!(TelemetryRecord::decode(&[]), Err(RecordError::Truncated));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let mut extended = [0u8; RECORD_SIZE + 4];
        extended[..RECORD_SIZE].copy_from_slice(&sample().encode());
        let decoded = TelemetryRecord::decode(&extended).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_zero_record() {
        let rec = TelemetryRecord::default();
        let buf = rec.encode();
        assert!(buf.iter().all(|&b| b == 0));
    }
}
