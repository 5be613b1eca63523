use crate::error::Error;
use crate::interrupt;
use crate::result::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io;
use std::path::Path;
use tar::Builder;

/// Write a gzip-compressed tar of the top-level entries of `source_dir`
///
/// Entry names are relative to `source_dir` (`include/...`, `lib/...`). The
/// archive is assembled next to `output_path` and renamed into place once
/// complete, so a failure never leaves a partial archive behind.
pub fn create_tar_gz(source_dir: &Path, output_path: &Path) -> Result<()> {
    write_tar_gz(source_dir, output_path).map_err(|error| Error::Archive {
        path: output_path.to_path_buf(),
        error,
    })
}

fn write_tar_gz(source_dir: &Path, output_path: &Path) -> io::Result<()> {
    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tar_gz = tempfile::Builder::new()
        .prefix(".package-release-")
        .suffix(".partial")
        .tempfile_in(parent)?;
    let _guard = interrupt::guard(tar_gz.path());

    let enc = GzEncoder::new(tar_gz, Compression::default());
    let mut tar = Builder::new(enc);

    let mut entries = fs::read_dir(source_dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = entry.file_name();
        if entry.file_type()?.is_dir() {
            tar.append_dir_all(&name, entry.path())?;
        } else {
            tar.append_path_with_name(entry.path(), &name)?;
        }
    }

    let tar_gz = tar.into_inner()?.finish()?;
    tar_gz.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tar_gz.path(), fs::Permissions::from_mode(0o644))?;
    }

    tar_gz.persist(output_path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::fs::File;
    use tempfile::tempdir;

    fn entries(archive: &Path) -> Vec<String> {
        let mut archive = tar::Archive::new(GzDecoder::new(File::open(archive).unwrap()));
        let mut names: Vec<String> = archive
            .entries()
            .unwrap()
            .map(|entry| {
                let path = entry.unwrap().path().unwrap().to_string_lossy().into_owned();
                path.trim_end_matches('/').to_string()
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_entries_are_relative_to_source() {
        let source = tempdir().unwrap();
        fs::create_dir_all(source.path().join("lib/pkgconfig")).unwrap();
        fs::create_dir_all(source.path().join("include")).unwrap();
        fs::write(source.path().join("include/sector_builder_ffi.h"), b"header").unwrap();

        let out = tempdir().unwrap();
        let archive = out.path().join("release.tar.gz");
        create_tar_gz(source.path(), &archive).unwrap();

        assert_eq!(
            entries(&archive),
            vec!["include", "include/sector_builder_ffi.h", "lib", "lib/pkgconfig"]
        );
    }

    #[test]
    fn test_missing_destination_directory_fails() {
        let source = tempdir().unwrap();
        let out = tempdir().unwrap();
        let archive = out.path().join("missing/release.tar.gz");

        let err = create_tar_gz(source.path(), &archive).unwrap_err();
        assert!(matches!(err, Error::Archive { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_write_leaves_no_partial_archive() {
        use std::os::unix::fs::symlink;

        let source = tempdir().unwrap();
        fs::create_dir_all(source.path().join("include")).unwrap();
        symlink("missing.h", source.path().join("include/x.h")).unwrap();

        let out = tempdir().unwrap();
        let archive = out.path().join("out.tar.gz");
        assert!(create_tar_gz(source.path(), &archive).is_err());

        assert!(!archive.exists());
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_write_keeps_previous_archive() {
        use std::os::unix::fs::symlink;

        let source = tempdir().unwrap();
        symlink("missing.a", source.path().join("libsector_builder_ffi.a")).unwrap();

        let out = tempdir().unwrap();
        let archive = out.path().join("out.tar.gz");
        fs::write(&archive, b"previous release").unwrap();

        assert!(create_tar_gz(source.path(), &archive).is_err());
        assert_eq!(fs::read(&archive).unwrap(), b"previous release");
    }

    #[test]
    fn test_replaces_existing_archive() {
        let source = tempdir().unwrap();
        fs::create_dir_all(source.path().join("include")).unwrap();

        let out = tempdir().unwrap();
        let archive = out.path().join("out.tar.gz");
        fs::write(&archive, b"stale").unwrap();

        create_tar_gz(source.path(), &archive).unwrap();
        assert_eq!(entries(&archive), vec!["include"]);
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 1);
    }
}
