use serde::{Deserialize, Serialize};

/// One record per source file. Field order is the serialized order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub id: String,
    pub date: String,
    pub author: String,
    pub content: String,
}
