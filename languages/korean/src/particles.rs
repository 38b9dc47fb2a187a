/// Particles (조사) split off the end of a word, plus the polite 요 family
pub const DEFAULT_PARTICLES: &[&str] = &[
    // Topic / subject
    "은", "는", "이", "가",
    // Object
    "을", "를",
    // Location / direction
    "에", "에서", "에게", "한테", "께", "으로", "로",
    // Other
    "도", "만", "부터", "까지", "와", "과", "하고", "의", "보다",
    "처럼", "같이", "마다", "밖에", "나", "이나", "라고", "이라고",
    // Informal verb endings
    "요", "어요", "아요", "여요",
];

#[derive(Debug, Clone)]
pub struct ParticleTable {
    /// Longest first
    particles: Vec<String>,
}

impl ParticleTable {
    pub fn new() -> Self {
        Self::with_extra(Vec::new())
    }

    /// Built-in particles plus `extra`
    pub fn with_extra(extra: Vec<String>) -> Self {
        let mut particles: Vec<String> = DEFAULT_PARTICLES.iter().map(|p| p.to_string()).collect();
        for particle in extra {
            if !particle.is_empty() && !particles.contains(&particle) {
                particles.push(particle);
            }
        }
        particles.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
        Self { particles }
    }

    /// Split a trailing particle off `word`, returning `(stem, particle)`.
    /// The stem is never empty, so single-character words never split.
    pub fn detect<'a>(&self, word: &'a str) -> Option<(&'a str, &'a str)> {
        if word.chars().count() <= 1 {
            return None;
        }

        self.particles.iter().find_map(|particle| {
            let stem = word.strip_suffix(particle.as_str())?;
            if stem.is_empty() {
                return None;
            }
            Some((stem, &word[stem.len()..]))
        })
    }

    pub fn contains(&self, particle: &str) -> bool {
        self.particles.iter().any(|p| p == particle)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Default for ParticleTable {
    fn default() -> Self {
        Self::new()
    }
}
