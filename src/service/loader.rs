// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recursive-descent loader for line-oriented config files.
//!
//! Each file is scanned one line at a time. Known defines are substituted into the
//! line first, then the line is tokenized on whitespace and interpreted as a
//! directive (`#DEFINE`, `#ENV`, `#INCLUDE`), a comment, or a key/value entry.
//!
//! Includes are loaded recursively. A nested load receives *copies* of the
//! current define table and include set, and hands back its entries, its final
//! define table and every file it opened; the caller merges those into its own
//! state at the point of the directive.

use crate::adapters::{FsReader, ProcessEnv};
use crate::domain::{ConfigError, DefineTable, Entry, IncludeSet, Result, Stem};
use crate::ports::{Environment, SourceReader};
use crate::service::ConfigStore;
use directories::ProjectDirs;
use std::io::BufRead;
use std::path::PathBuf;

const DEFINE_DIRECTIVE: &str = "#DEFINE";
const ENV_DIRECTIVE: &str = "#ENV";
const INCLUDE_DIRECTIVE: &str = "#INCLUDE";
const COMMENT_MARKER: char = '#';
const CONTINUATION_SUFFIX: &str = "+=";

/// Loads config files into a [`ConfigStore`].
///
/// A loader owns the two collaborators it reads through (a [`SourceReader`] and an
/// [`Environment`]) plus any defines that should be visible before the first line
/// of the root file.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::{InMemoryReader, StaticEnv};
/// use dotcfg::service::Loader;
///
/// # fn main() -> dotcfg::domain::Result<()> {
/// let reader = InMemoryReader::new().with_file(
///     "app.cfg",
///     "#DEFINE <path> /usr/share\n#ENV <stage> STAGE\nlib <path>/lib\nstage <stage>\n",
/// );
///
/// let loader = Loader::builder()
///     .with_reader(reader)
///     .with_environment(StaticEnv::new().with_var("STAGE", "prod"))
///     .build()?;
///
/// let store = loader.load("app.cfg")?;
/// assert_eq!(store.get(&["lib"])?, "/usr/share/lib");
/// assert_eq!(store.get(&["stage"])?, "prod");
/// # Ok(())
/// # }
/// ```
pub struct Loader {
    reader: Box<dyn SourceReader>,
    environment: Box<dyn Environment>,
    defines: DefineTable,
}

/// Everything a single file (and its includes) contributed.
struct FileOutcome {
    entries: Vec<Entry>,
    defines: DefineTable,
    includes: IncludeSet,
}

impl Loader {
    /// Creates a loader reading from the file system and the process environment.
    pub fn new() -> Self {
        Self {
            reader: Box::new(FsReader::new()),
            environment: Box::new(ProcessEnv::new()),
            defines: DefineTable::new(),
        }
    }

    /// Creates a new loader builder.
    pub fn builder() -> LoaderBuilder {
        LoaderBuilder::new()
    }

    /// Loads `path` and everything it includes.
    pub fn load(&self, path: &str) -> Result<ConfigStore> {
        let outcome = self.load_file(path, self.defines.clone(), IncludeSet::seeded(path))?;

        tracing::debug!(
            "Loaded config {}: {} entries, {} defines, {} files",
            path,
            outcome.entries.len(),
            outcome.defines.len(),
            outcome.includes.len()
        );

        Ok(ConfigStore::from_entries(outcome.entries))
    }

    /// Loads `filename` from the OS-appropriate configuration directory.
    ///
    /// This uses the `directories` crate, so on Linux `("myapp", "com.example",
    /// "app.cfg")` resolves to `~/.config/myapp/app.cfg`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use dotcfg::service::Loader;
    ///
    /// let store = Loader::new().load_default("myapp", "com.example", "app.cfg").unwrap();
    /// ```
    pub fn load_default(&self, app_name: &str, qualifier: &str, filename: &str) -> Result<ConfigStore> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConfigError::ConfigDirUnavailable {
                app_name: app_name.to_string(),
            }
        })?;

        let config_file = proj_dirs.config_dir().join(filename);
        self.load(&config_file.to_string_lossy())
    }

    fn load_file(
        &self,
        path: &str,
        mut defines: DefineTable,
        mut includes: IncludeSet,
    ) -> Result<FileOutcome> {
        let mut reader = self.reader.open(path).map_err(|source| ConfigError::FileOpen {
            path: PathBuf::from(path),
            source,
        })?;
        tracing::debug!("Reading config file {}", path);

        let mut entries: Vec<Entry> = Vec::new();
        // Entry created by the last key line of this file, for `+=`
        let mut previous: Option<usize> = None;

        let mut buf = Vec::new();
        while let Some(raw) = Self::next_line(reader.as_mut(), &mut buf, path)? {
            let line = defines.apply(&raw);
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 2 {
                continue;
            }

            match tokens[0] {
                DEFINE_DIRECTIVE => {
                    let target = Self::define_target(&tokens, &line)?;
                    Self::register(&mut defines, target, tokens[2..].join(" "))?;
                }
                ENV_DIRECTIVE => {
                    let target = Self::define_target(&tokens, &line)?;
                    let value = self.env_value(&tokens, &line)?;
                    Self::register(&mut defines, target, value)?;
                }
                INCLUDE_DIRECTIVE => {
                    let target = tokens[1];
                    if includes.contains(target) {
                        return Err(ConfigError::CircularInclusion {
                            path: target.to_string(),
                            included_from: path.to_string(),
                        });
                    }
                    tracing::debug!("{} included {}", path, target);

                    let mut child_includes = includes.clone();
                    child_includes.insert(target);
                    let child = self.load_file(target, defines.clone(), child_includes)?;

                    includes = includes.union(&child.includes);
                    entries.extend(child.entries);
                    defines.merge(child.defines);
                }
                first if first.starts_with(COMMENT_MARKER) => {}
                first => {
                    let value = tokens[1..].join(" ");

                    if let Some(key) = first.strip_suffix(CONTINUATION_SUFFIX) {
                        match previous {
                            Some(i) if entries[i].key == *key => entries[i].value.append(&value),
                            _ => {
                                return Err(ConfigError::ContinuationMismatch {
                                    line: line.clone(),
                                    previous_key: previous
                                        .map(|i| entries[i].key.to_string())
                                        .unwrap_or_default(),
                                    stem: Stem::default(),
                                });
                            }
                        }
                        continue;
                    }

                    entries.push(Entry::new(first, value));
                    previous = Some(entries.len() - 1);
                }
            }
        }

        Ok(FileOutcome {
            entries,
            defines,
            includes,
        })
    }

    /// Reads the next line without its terminator. Bytes that are not valid UTF-8
    /// are replaced, so a stray Latin-1 byte never makes a file unreadable.
    fn next_line(
        reader: &mut dyn BufRead,
        buf: &mut Vec<u8>,
        path: &str,
    ) -> Result<Option<String>> {
        buf.clear();
        let read = reader
            .read_until(b'\n', buf)
            .map_err(|source| ConfigError::FileRead {
                path: PathBuf::from(path),
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }

        let mut bytes = buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        Ok(Some(String::from_utf8_lossy(bytes).into_owned()))
    }

    /// Validates the `<...>` target of a `#DEFINE` or `#ENV` line.
    fn define_target<'a>(tokens: &[&'a str], line: &str) -> Result<&'a str> {
        let target = tokens[1];
        if !DefineTable::is_target(target) {
            return Err(ConfigError::MalformedDefine {
                target: target.to_string(),
                line: line.to_string(),
            });
        }
        Ok(target)
    }

    /// Resolves the variable named by `#ENV <target> VAR_NAME`.
    fn env_value(&self, tokens: &[&str], line: &str) -> Result<String> {
        if tokens.len() != 3 {
            return Err(ConfigError::MalformedEnv {
                target: tokens[1].to_string(),
                line: line.to_string(),
            });
        }

        let variable = tokens[2];
        match self.environment.var(variable) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::MissingEnvVar {
                variable: variable.to_string(),
                line: line.to_string(),
            }),
        }
    }

    // A live target is substituted into its own directive before it gets here, so
    // a second `#DEFINE <x>` fails as malformed instead of redefining.
    fn register(defines: &mut DefineTable, target: &str, definition: String) -> Result<()> {
        tracing::trace!("Registering define {}", target);
        defines.insert(target, definition)?;
        Ok(())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`Loader`].
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::{InMemoryReader, StaticEnv};
/// use dotcfg::service::LoaderBuilder;
///
/// # fn main() -> dotcfg::domain::Result<()> {
/// let loader = LoaderBuilder::new()
///     .with_reader(InMemoryReader::new().with_file("a.cfg", "root <root>\n"))
///     .with_environment(StaticEnv::new())
///     .with_define("<root>", "/srv")
///     .build()?;
///
/// assert_eq!(loader.load("a.cfg")?.get(&["root"])?, "/srv");
/// # Ok(())
/// # }
/// ```
pub struct LoaderBuilder {
    reader: Box<dyn SourceReader>,
    environment: Box<dyn Environment>,
    defines: Vec<(String, String)>,
}

impl LoaderBuilder {
    /// Creates a new builder with file-system and process-environment defaults.
    pub fn new() -> Self {
        Self {
            reader: Box::new(FsReader::new()),
            environment: Box::new(ProcessEnv::new()),
            defines: Vec::new(),
        }
    }

    /// Sets the reader used to open the root file and every include.
    pub fn with_reader<R: SourceReader + 'static>(mut self, reader: R) -> Self {
        self.reader = Box::new(reader);
        self
    }

    /// Sets the environment consulted by `#ENV` directives.
    pub fn with_environment<E: Environment + 'static>(mut self, environment: E) -> Self {
        self.environment = Box::new(environment);
        self
    }

    /// Adds a define visible from the first line of the root file.
    ///
    /// The token must be wrapped in `<` and `>`; this is checked by [`build`](Self::build).
    pub fn with_define(mut self, target: impl Into<String>, definition: impl Into<String>) -> Self {
        self.defines.push((target.into(), definition.into()));
        self
    }

    /// Builds the loader.
    pub fn build(self) -> Result<Loader> {
        let mut defines = DefineTable::new();
        for (target, definition) in self.defines {
            defines.insert(target, definition)?;
        }

        Ok(Loader {
            reader: self.reader,
            environment: self.environment,
            defines,
        })
    }
}

impl Default for LoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
