//! Ordered CSS declaration lists.
use smallvec::SmallVec;
use std::fmt;

/// An ordered list of `property: value;` declarations.
///
/// Properties keep their insertion order. Setting a property twice replaces
/// the earlier value in place, and empty values are never stored.
///
/// # Examples
///
/// ```rust
/// use loquat::common::css::CssDeclarations;
///
/// let mut css = CssDeclarations::new();
/// css.set("font-weight", "bold");
/// css.set("color", "#FF0000");
/// css.set("text-align", "");
/// assert_eq!(css.to_string(), "font-weight: bold; color: #FF0000;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssDeclarations {
    declarations: SmallVec<[(&'static str, String); 8]>,
}

impl CssDeclarations {
    /// Create an empty declaration list.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` to `value`, ignoring empty values.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if value.is_empty() {
            return self;
        }
        match self.declarations.iter_mut().find(|(name, _)| *name == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Set `property` to `value` only when `condition` holds.
    #[inline]
    pub fn set_if(
        &mut self,
        condition: bool,
        property: &'static str,
        value: impl Into<String>,
    ) -> &mut Self {
        if condition {
            self.set(property, value);
        }
        self
    }

    /// Value currently set for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }
}

impl fmt::Display for CssDeclarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

/// Format a length in points the way CSS expects it (`12pt`, `10.5pt`).
pub fn points(value: f32) -> String {
    format!("{}pt", value)
}
