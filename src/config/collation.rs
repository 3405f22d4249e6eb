use crate::error::{BuildCollatorSnafu, InquisitorResult, InvalidLocaleSnafu};
use icu::{
    collator::{Collator, CollatorBorrowed, CollatorPreferences, options::CollatorOptions},
    locale::Locale,
};
use snafu::ResultExt;
use std::{cmp::Ordering, fmt};

/// Locale-aware string ordering, used for every sort of the roster.
pub struct Collation {
    locale: Locale,
    collator: CollatorBorrowed<'static>,
}

impl Collation {
    pub fn new(locale: String) -> InquisitorResult<Self> {
        let parsed =
            Locale::try_from_str(&locale).context(InvalidLocaleSnafu { provided: &locale })?;

        let collator = Collator::try_new(CollatorPreferences::from(&parsed), CollatorOptions::default())
            .context(BuildCollatorSnafu { locale })?;

        Ok(Self {
            locale: parsed,
            collator,
        })
    }

    pub fn root() -> InquisitorResult<Self> {
        Self::new("und".to_string())
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation")
            .field("locale", &self.locale.to_string())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InquisitorError;

    #[test]
    fn root_orders_case_insensitively_first() {
        let collation = Collation::root().unwrap();
        assert_eq!(collation.compare("abbott", "Bones"), Ordering::Less);
        assert_eq!(collation.compare("Zabini", "abbott"), Ordering::Greater);
        assert_eq!(collation.compare("Potter", "Potter"), Ordering::Equal);
    }

    #[test]
    fn accents_sort_next_to_their_base_letter() {
        let collation = Collation::new("en".to_string()).unwrap();
        assert_eq!(collation.compare("Éloïse", "Fleur"), Ordering::Less);
        assert_eq!(collation.compare("Éloïse", "Dean"), Ordering::Greater);
    }

    #[test]
    fn bad_locale() {
        let err = Collation::new("not a locale!".to_string()).unwrap_err();
        assert!(matches!(err, InquisitorError::InvalidLocale { .. }));
    }
}
