use std::collections::HashMap;

/// Template processor for resolving $VARIABLE format variables
pub struct Tpl {
    variables: HashMap<String, String>,
}

impl Tpl {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Register a variable with its value
    pub fn register<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.variables.insert(key.into(), value.into());
    }

    /// Parse a string and resolve all $VARIABLE references
    ///
    /// Single left-to-right pass: substituted values are never rescanned, and
    /// at each `$` the longest registered name wins (`$IDENTITY` over `$ID`).
    pub fn parse(&self, input: &str) -> String {
        let mut result = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(pos) = rest.find('$') {
            result.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            let key = self
                .variables
                .keys()
                .filter(|key| after.starts_with(key.as_str()))
                .max_by_key(|key| key.len());

            match key {
                Some(key) => {
                    result.push_str(&self.variables[key]);
                    rest = &after[key.len()..];
                }
                None => {
                    result.push('$');
                    rest = after;
                }
            }
        }
        result.push_str(rest);

        result
    }
}

impl Default for Tpl {
    fn default() -> Self {
        Self::new()
    }
}
