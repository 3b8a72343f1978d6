//! Common test utilities for hexo2astro integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test workspace holding an input tree and the files a run produces
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create the default `input` directory
    #[allow(dead_code)]
    pub fn create_input_dir(&self) -> PathBuf {
        let input = self.path.join("input");
        std::fs::create_dir_all(&input).expect("Failed to create input directory");
        input
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// A Hexo post with every front matter rule in play
#[allow(dead_code)]
pub const HEXO_POST: &str = "---
title: Hello World
date: 2020-01-01 12:00:00
updated: 2020-02-02
mathjax: true
categories:
  - Tech
tags:
  - rust
  - cli
---
This is the teaser.
It spans two lines.

<!-- more -->

The rest of the post.
";
