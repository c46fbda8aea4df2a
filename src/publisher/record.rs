/// The routing key handed to the broker: the event identifier, when one
/// exists. Records published without a key leave partition placement to the
/// broker's default partitioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishKey(pub i32);

impl PublishKey {
    /// Encodes the key for the wire: the identifier's 4-byte big-endian
    /// representation, matching the integer key serialization downstream
    /// consumers expect.
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// A fully specified unit of submission to the broker.
///
/// Built fresh for every publish call and never reused or mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRecord {
    /// Destination topic.
    pub topic: String,

    /// Target partition; `None` delegates placement to the broker.
    pub partition: Option<i32>,

    /// Routing key; `None` publishes the record unkeyed.
    pub key: Option<PublishKey>,

    /// The serialized event payload.
    pub payload: Vec<u8>,

    /// Record headers; unset in this producer role, carried as the hook
    /// point for header propagation.
    pub headers: Option<Vec<(String, Vec<u8>)>>,
}

/// Broker-assigned metadata for an acknowledged record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// The partition the record was appended to.
    pub partition: i32,

    /// The offset assigned within that partition.
    pub offset: i64,
}
