use std::path::Path;

/// Build artifacts shipped in a release archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Header,
    StaticLibrary,
    PkgConfig,
}

impl Artifact {
    pub const ALL: [Artifact; 3] = [Artifact::Header, Artifact::StaticLibrary, Artifact::PkgConfig];

    /// File name the artifact is discovered by
    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::Header => "sector_builder_ffi.h",
            Artifact::StaticLibrary => "libsector_builder_ffi.a",
            Artifact::PkgConfig => "sector_builder_ffi.pc",
        }
    }

    /// Directory inside the archive the artifact is placed in
    pub fn destination(&self) -> &'static Path {
        match self {
            Artifact::Header => Path::new("include"),
            Artifact::StaticLibrary => Path::new("lib"),
            Artifact::PkgConfig => Path::new("lib/pkgconfig"),
        }
    }

    /// Match a discovered file name against the artifact set
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|artifact| artifact.file_name() == name)
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_match() {
        assert_eq!(Artifact::from_file_name("sector_builder_ffi.h"), Some(Artifact::Header));
        assert_eq!(Artifact::from_file_name("libsector_builder_ffi.a"), Some(Artifact::StaticLibrary));
        assert_eq!(Artifact::from_file_name("sector_builder_ffi.pc"), Some(Artifact::PkgConfig));
        assert_eq!(Artifact::from_file_name("sector_builder_ffi.h.bak"), None);
        assert_eq!(Artifact::from_file_name("libsector_builder_ffi.so"), None);
    }

    #[test]
    fn test_destinations() {
        assert_eq!(Artifact::PkgConfig.destination(), Path::new("lib").join("pkgconfig"));
        assert!(Artifact::PkgConfig.destination().starts_with(Artifact::StaticLibrary.destination()));
    }
}
