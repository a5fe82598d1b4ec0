//! The translation seam used by diagnostic renderers.

/// Maps message keys to text in the active language.
///
/// Renderers take `&impl Translate` instead of reaching for a global
/// localizer, so tests can pass [`Untranslated`] or a fixed table.
pub trait Translate {
    /// Translates `msgid`, returning it unchanged when no translation exists.
    fn translate(&self, msgid: &str) -> String;

    /// Translates a message whose form depends on the count `n`.
    fn translate_plural(&self, msgid: &str, msgid_plural: &str, n: u64) -> String {
        if n == 1 {
            self.translate(msgid)
        } else {
            self.translate(msgid_plural)
        }
    }
}

/// A translator that returns every key as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translate for Untranslated {
    fn translate(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

impl<T: Translate + ?Sized> Translate for &T {
    fn translate(&self, msgid: &str) -> String {
        (**self).translate(msgid)
    }

    fn translate_plural(&self, msgid: &str, msgid_plural: &str, n: u64) -> String {
        (**self).translate_plural(msgid, msgid_plural, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shouting;

    impl Translate for Shouting {
        fn translate(&self, msgid: &str) -> String {
            msgid.to_uppercase()
        }
    }

    #[test]
    fn test_untranslated_passthrough() {
        assert_eq!(Untranslated.translate("token type"), "token type");
        assert_eq!(Untranslated.translate_plural("a", "b", 1), "a");
        assert_eq!(Untranslated.translate_plural("a", "b", 0), "b");
    }

    #[test]
    fn test_default_plural_uses_translate() {
        assert_eq!(Shouting.translate_plural("one", "many", 7), "MANY");
    }

    #[test]
    fn test_reference_forwarding() {
        fn render(t: impl Translate) -> String {
            t.translate("abc")
        }
        assert_eq!(render(&Shouting), "ABC");
    }
}
