use hashbrown::HashMap;

/// Key/value view over the ninth GFF3 column.
///
/// Entries are split on `;` and then on the first `=`. Entries without `=`
/// are dropped, keys and values are trimmed and a repeated key keeps its last
/// value.
#[derive(Debug, Default, PartialEq)]
pub struct Attributes<'a> {
    inner: HashMap<&'a str, &'a str>,
}

impl<'a> Attributes<'a> {
    /// Parses an attribute column such as `ID=gene1;Name=ABC1`.
    ///
    /// # Arguments
    ///
    /// * `field` - Raw content of the attribute column
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use gff2fa::gff::Attributes;
    ///
    /// let attr = Attributes::parse("ID=YAR003W;Name=SWD1");
    /// assert_eq!(attr.get("Name"), Some("SWD1"));
    /// ```
    pub fn parse(field: &'a str) -> Self {
        let mut inner = HashMap::new();

        for entry in field.split(';') {
            if let Some((key, value)) = entry.split_once('=') {
                inner.insert(key.trim(), value.trim());
            }
        }

        Self { inner }
    }

    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.inner.get(key).copied()
    }

    /// Exact, case-sensitive comparison of `key`'s value against `value`.
    #[inline(always)]
    pub fn matches(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
