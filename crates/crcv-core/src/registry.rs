//! Ordered, immutable set of labeled reference checksums.

use crate::checksum::Checksum;
use crate::error::RegistryError;

/// Presets shipped with the tool, in display order.
pub const BUILTIN_REFERENCES: &[(&str, Checksum)] = &[
    ("OMNIA/LV/PHOENIX", Checksum::new(0xBA1D_ED31)),
    ("ENTRY/LV", Checksum::new(0x6477_BBA7)),
    ("BASIC/LV", Checksum::new(0x932E_A465)),
];

/// One labeled reference checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub label: String,
    pub checksum: Checksum,
}

/// Label -> reference CRC32, in insertion order. Labels match case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRegistry {
    entries: Vec<Reference>,
}

impl ReferenceRegistry {
    /// Registry holding [`BUILTIN_REFERENCES`].
    pub fn builtin() -> Self {
        let entries = BUILTIN_REFERENCES
            .iter()
            .map(|&(label, checksum)| Reference {
                label: label.to_string(),
                checksum,
            })
            .collect();
        Self { entries }
    }

    /// Build a registry from `(label, hex)` pairs, validating every entry.
    pub fn from_entries<I, L, V>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (L, V)>,
        L: AsRef<str>,
        V: AsRef<str>,
    {
        let mut out: Vec<Reference> = Vec::new();
        for (label, value) in entries {
            let label = label.as_ref().trim();
            if label.is_empty() {
                return Err(RegistryError::EmptyLabel);
            }
            if out.iter().any(|r| r.label == label) {
                return Err(RegistryError::DuplicateLabel(label.to_string()));
            }
            let checksum: Checksum =
                value
                    .as_ref()
                    .parse()
                    .map_err(|_| RegistryError::InvalidChecksum {
                        label: label.to_string(),
                        value: value.as_ref().to_string(),
                    })?;
            out.push(Reference {
                label: label.to_string(),
                checksum,
            });
        }
        Ok(Self { entries: out })
    }

    pub fn get(&self, label: &str) -> Option<Checksum> {
        self.entries
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.checksum)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|r| r.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReferenceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_and_values() {
        let reg = ReferenceRegistry::builtin();
        let labels: Vec<&str> = reg.labels().collect();
        assert_eq!(labels, ["OMNIA/LV/PHOENIX", "ENTRY/LV", "BASIC/LV"]);
        assert_eq!(reg.get("BASIC/LV"), Some(Checksum::new(0x932E_A465)));
        assert_eq!(reg.get("ENTRY/LV").unwrap().to_string(), "6477BBA7");
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let reg = ReferenceRegistry::builtin();
        assert!(reg.get("basic/lv").is_none());
        assert!(!reg.contains("BASIC"));
    }

    #[test]
    fn lowercase_values_are_normalized() {
        let reg = ReferenceRegistry::from_entries([("X", "ba1ded31")]).unwrap();
        assert_eq!(reg.get("X").unwrap().to_string(), "BA1DED31");
    }

    #[test]
    fn labels_are_trimmed() {
        let reg = ReferenceRegistry::from_entries([("  X  ", "00000000")]).unwrap();
        assert!(reg.contains("X"));
    }

    #[test]
    fn rejects_empty_label() {
        let err = ReferenceRegistry::from_entries([("  ", "00000000")]).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyLabel));
    }

    #[test]
    fn rejects_duplicate_label() {
        let err =
            ReferenceRegistry::from_entries([("A", "00000000"), ("A", "11111111")]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateLabel(l) if l == "A"));
    }

    #[test]
    fn rejects_bad_checksum() {
        let err = ReferenceRegistry::from_entries([("A", "1234")]).unwrap_err();
        match err {
            RegistryError::InvalidChecksum { label, value } => {
                assert_eq!(label, "A");
                assert_eq!(value, "1234");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_registry() {
        let reg = ReferenceRegistry::from_entries(Vec::<(String, String)>::new()).unwrap();
        assert!(reg.is_empty());
    }
}
