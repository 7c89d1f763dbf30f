//! Tag filters

use crate::select::Select;
use crate::tag::TagData;
use mercury_core::MercuryResult;
use serde::{Deserialize, Serialize};

/// Rule selecting which tags an operation applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagFilter {
    /// Gen2 Select mask comparison
    Select(Select),
    /// Exact identifier match
    Tag(TagData),
    /// Every filter must match; empty matches every tag
    All(Vec<TagFilter>),
}

impl TagFilter {
    /// Evaluate the filter against a tag's EPC identifier bytes
    ///
    /// `All` stops at the first filter that does not match or fails.
    pub fn matches(&self, epc: &[u8]) -> MercuryResult<bool> {
        match self {
            TagFilter::Select(select) => select.matches(epc),
            TagFilter::Tag(tag) => Ok(tag.matches(epc)),
            TagFilter::All(filters) => {
                for filter in filters {
                    if !filter.matches(epc)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }
}

impl From<Select> for TagFilter {
    fn from(select: Select) -> Self {
        TagFilter::Select(select)
    }
}

impl From<TagData> for TagFilter {
    fn from(tag: TagData) -> Self {
        TagFilter::Tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Bank;

    const EPC: [u8; 4] = [0x30, 0x08, 0x33, 0xB2];

    #[test]
    fn test_dispatch() {
        let select: TagFilter = Select::new(false, Bank::Epc, 32, 8, vec![0x30]).unwrap().into();
        assert!(select.matches(&EPC).unwrap());

        let tag: TagFilter = TagData::new(EPC).into();
        assert!(tag.matches(&EPC).unwrap());
        assert!(!tag.matches(&EPC[..3]).unwrap());
    }

    #[test]
    fn test_all() {
        let first = Select::new(false, Bank::Epc, 32, 8, vec![0x30]).unwrap();
        let second = Select::new(false, Bank::Epc, 40, 8, vec![0x08]).unwrap();
        let other = Select::new(false, Bank::Epc, 40, 8, vec![0x09]).unwrap();

        let both = TagFilter::All(vec![first.clone().into(), second.into()]);
        assert!(both.matches(&EPC).unwrap());

        let mixed = TagFilter::All(vec![first.into(), other.into()]);
        assert!(!mixed.matches(&EPC).unwrap());

        assert!(TagFilter::All(vec![]).matches(&EPC).unwrap());
    }

    #[test]
    fn test_all_propagates_errors() {
        let tid = Select::new(false, Bank::Tid, 0, 8, vec![0xE2]).unwrap();
        let filter = TagFilter::All(vec![tid.into()]);
        assert!(filter.matches(&EPC).is_err());
    }

    #[test]
    fn test_serde() {
        let filter = TagFilter::All(vec![
            TagData::new(vec![0x01]).into(),
            Select::new(true, Bank::Epc, 32, 4, vec![0xF0]).unwrap().into(),
        ]);
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(serde_json::from_str::<TagFilter>(&json).unwrap(), filter);
    }
}
