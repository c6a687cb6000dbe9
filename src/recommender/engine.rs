use crate::recommender::dataset::DatasetRow;
use log::debug;

/// Questionnaire answers for one user. `age` is the user's actual age and
/// matches any row whose age bound is at least as large.
#[derive(Clone, Debug)]
pub struct Profile {
    pub age: u32,
    pub education: String,
    pub occupation: String,
    pub interest: String,
    pub experience: String,
}

/// Read-only lookup over the dataset loaded at startup. Constructed once
/// and injected into the service; never mutated afterwards.
pub struct Recommender {
    rows: Vec<DatasetRow>,
}

impl Recommender {
    pub fn new(rows: Vec<DatasetRow>) -> Self {
        Recommender { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Three lookup tiers, each falling through to the next when it yields
    /// no candidate:
    ///
    /// 1. all five answers match a row exactly (age within the row's bound);
    /// 2. only the interest matches;
    /// 3. the most frequent skill across all rows that carry an interest.
    ///
    /// Within a tier the first row in load order wins; in tier 3 a skill
    /// replaces the running champion only with a strictly greater count, so
    /// ties keep the first-encountered skill. `None` only when the dataset
    /// has no candidates at all.
    pub fn recommend(&self, profile: &Profile) -> Option<String> {
        if let Some(row) = self.rows.iter().find(|row| {
            row.age >= profile.age
                && row.education == profile.education
                && row.occupation == profile.occupation
                && row.interest == profile.interest
                && row.experience == profile.experience
        }) {
            return Some(row.recommended_skill.clone());
        }

        debug!("no exact match for interest {:?}, relaxing to interest only", profile.interest);
        if let Some(row) = self.rows.iter().find(|row| row.interest == profile.interest) {
            return Some(row.recommended_skill.clone());
        }

        debug!("no interest match for {:?}, falling back to the global mode", profile.interest);
        self.most_common_skill()
    }

    fn most_common_skill(&self) -> Option<String> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for row in self.rows.iter().filter(|row| !row.interest.is_empty()) {
            match counts.iter_mut().find(|(skill, _)| *skill == row.recommended_skill) {
                Some((_, count)) => *count += 1,
                None => counts.push((row.recommended_skill.as_str(), 1)),
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (skill, count) in counts {
            match best {
                Some((_, best_count)) if count > best_count => best = Some((skill, count)),
                None => best = Some((skill, count)),
                _ => {}
            }
        }
        best.map(|(skill, _)| skill.to_string())
    }
}
