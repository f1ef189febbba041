use std::collections::{HashMap, HashSet};

use uuid::Uuid;

/// Turns the ids an admin client sends into database keys.
///
/// A record keeps its id when it is a UUID not claimed earlier in the same
/// payload. Placeholders (`draft-17`, `tmp_abc`), missing ids and repeated
/// ids get a fresh UUID. The first claim of each raw id is remembered so
/// references inside the payload can follow it.
/// UUIDs match in any spelling; placeholders match exactly.
pub fn ref_key(raw: &str) -> String {
    match Uuid::parse_str(raw) {
        Ok(id) => id.to_string(),
        Err(_) => raw.to_string(),
    }
}

#[derive(Debug, Default)]
pub struct IdResolver {
    assigned: HashMap<String, Uuid>,
    used: HashSet<Uuid>,
}

impl IdResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, raw: Option<&str>) -> Uuid {
        let raw = raw.map(str::trim).filter(|r| !r.is_empty());

        let Some(raw) = raw else {
            return self.mint();
        };

        let key = ref_key(raw);
        if self.assigned.contains_key(&key) {
            return self.mint();
        }

        let id = match Uuid::parse_str(raw) {
            Ok(parsed) if !self.used.contains(&parsed) => {
                self.used.insert(parsed);
                parsed
            }
            _ => self.mint(),
        };

        self.assigned.insert(key, id);
        id
    }

    /// Id a reference should point at, if the referenced record was claimed.
    pub fn lookup(&self, raw: &str) -> Option<Uuid> {
        self.assigned.get(&ref_key(raw.trim())).copied()
    }

    /// Makes `raw` resolve to an already claimed id.
    pub fn alias(&mut self, raw: Option<&str>, target: Uuid) {
        if let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) {
            self.assigned.entry(ref_key(raw)).or_insert(target);
        }
    }

    fn mint(&mut self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.used.insert(id) {
                return id;
            }
        }
    }
}
