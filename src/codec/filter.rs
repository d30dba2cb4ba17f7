use crate::dom::dom_model::ControlElement;

pub type ControlPredicate = Box<dyn Fn(&ControlElement) -> bool>;

/// Name-filtering policy: an optional allow-list, a deny-list, and optional
/// allow/deny predicates over the raw control for cases where the name alone
/// is not enough.
///
/// A name or control is excluded if it matches any deny rule, or if at least
/// one allow rule exists and it matches none of them.
#[derive(Default)]
pub struct FilterConfig {
    pub include: Option<Vec<String>>,
    pub exclude: Vec<String>,
    pub include_filter: Option<ControlPredicate>,
    pub exclude_filter: Option<ControlPredicate>,
}

impl FilterConfig {
    pub fn new() -> Self {
        FilterConfig::default()
    }

    pub fn include_names(names: &[&str]) -> Self {
        FilterConfig {
            include: Some(names.iter().map(|n| n.to_string()).collect()),
            ..FilterConfig::default()
        }
    }

    pub fn exclude_names(names: &[&str]) -> Self {
        FilterConfig {
            exclude: names.iter().map(|n| n.to_string()).collect(),
            ..FilterConfig::default()
        }
    }

    /// Name-only check, used where no control is at hand (record names on
    /// restore). Predicates only ever judge controls, so they do not reject
    /// a bare name here.
    pub fn allows_name(&self, name: &str) -> bool {
        if self.exclude.iter().any(|n| n == name) {
            return false;
        }
        match &self.include {
            Some(list) => list.iter().any(|n| n == name),
            None => true,
        }
    }

    /// Full check against a live control. A control without a name is never
    /// allowed.
    pub fn allows_control(&self, el: &ControlElement) -> bool {
        let Some(name) = el.name.as_deref() else {
            return false;
        };
        if self.exclude.iter().any(|n| n == name) {
            return false;
        }
        if let Some(deny) = &self.exclude_filter {
            if deny(el) {
                return false;
            }
        }

        if self.include.is_none() && self.include_filter.is_none() {
            return true;
        }
        if let Some(list) = &self.include {
            if list.iter().any(|n| n == name) {
                return true;
            }
        }
        if let Some(allow) = &self.include_filter {
            if allow(el) {
                return true;
            }
        }
        false
    }
}
