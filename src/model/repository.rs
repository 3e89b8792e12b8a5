#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RepositoryRecord {
    pub name: String,
    pub owner: String,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub size: u64,
    pub license: Option<String>,
}

// Create
impl RepositoryRecord {
    pub fn new(
        name: impl ToString,
        owner: impl ToString,
        language: Option<&str>,
        stars: u64,
        forks: u64,
        size: u64,
        license: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            owner: owner.to_string(),
            language: language.map(String::from),
            stars,
            forks,
            size,
            license: license.map(String::from),
        }
    }
}

/// Result of probing the contents of one repository.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RepositoryHealth {
    pub has_readme: bool,
    pub has_ci: bool,
    pub has_tests: bool,
}
