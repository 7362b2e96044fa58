//! Test helpers for temporary workspaces and captured output.

use camino::{Utf8Path, Utf8PathBuf};
use roadlog_core::test_support::{StraightLineRouter, TableGeocoder};
use roadlog_core::{Geocoder, RouteProvider};
use std::fs;
use tempfile::TempDir;

use crate::CliError;
use crate::plan::{CollaboratorFactory, PlanConfig};

/// A temporary directory addressed with UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn read_utf8(path: &Utf8Path) -> String {
    fs::read_to_string(path.as_std_path()).expect("read test file")
}

/// Offline collaborators: a table of Midwest hubs and straight-line legs.
pub(super) struct OfflineCollaborators;

impl CollaboratorFactory for OfflineCollaborators {
    fn geocoder(&self, _config: &PlanConfig) -> Result<Box<dyn Geocoder>, CliError> {
        Ok(Box::new(TableGeocoder::midwest()))
    }

    fn router(&self, _config: &PlanConfig) -> Result<Box<dyn RouteProvider>, CliError> {
        Ok(Box::new(StraightLineRouter))
    }
}
