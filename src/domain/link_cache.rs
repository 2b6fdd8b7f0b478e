use std::collections::HashSet;

/// URLs already confirmed reachable during one bundle run.
///
/// Only successes are remembered; a failed link is probed again the next
/// time it is referenced.
#[derive(Debug, Default)]
pub struct LinkCache {
    confirmed: HashSet<String>,
}

impl LinkCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.confirmed.contains(url)
    }

    pub fn insert(&mut self, url: impl Into<String>) {
        self.confirmed.insert(url.into());
    }

    pub fn len(&self) -> usize {
        self.confirmed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_inserted_urls() {
        let mut cache = LinkCache::new();
        assert!(cache.is_empty());

        cache.insert("https://example.com/logo.png");
        cache.insert("https://example.com/logo.png");

        assert!(cache.contains("https://example.com/logo.png"));
        assert!(!cache.contains("https://example.com/other.png"));
        assert_eq!(cache.len(), 1);
    }
}
