// hunlite-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use hunlite_dict::{LoadOptions, SpellHandle};

/// Language used when no `-l/--lang` is given.
pub const DEFAULT_LANG: &str = "en_US";

/// Environment variable naming an extra dictionary directory.
pub const DICT_PATH_ENV: &str = "HUNLITE_DICT_PATH";

/// Options shared by every tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonArgs {
    pub dict_path: Option<String>,
    pub lang: String,
    pub verbose: bool,
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            dict_path: None,
            lang: DEFAULT_LANG.to_string(),
            verbose: false,
        }
    }
}

/// Dictionary files found for a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryFiles {
    /// A `<lang>.json` written by `hunlite-pack`.
    Packed(PathBuf),
    /// A `<lang>.aff` and `<lang>.dic` pair.
    Source { aff: PathBuf, dic: PathBuf },
}

/// Look for `lang` in `dir`, preferring a packed dictionary.
pub fn dictionary_in(dir: &Path, lang: &str) -> Option<DictionaryFiles> {
    let packed = dir.join(format!("{lang}.json"));
    if packed.is_file() {
        return Some(DictionaryFiles::Packed(packed));
    }
    source_in(dir, lang)
}

/// Look for the `.aff`/`.dic` pair of `lang` in `dir`.
pub fn source_in(dir: &Path, lang: &str) -> Option<DictionaryFiles> {
    let aff = dir.join(format!("{lang}.aff"));
    let dic = dir.join(format!("{lang}.dic"));
    (aff.is_file() && dic.is_file()).then_some(DictionaryFiles::Source { aff, dic })
}

/// Search the dictionary directories for `lang` using `probe`.
pub fn find_dictionary(
    dict_path: Option<&str>,
    lang: &str,
    probe: fn(&Path, &str) -> Option<DictionaryFiles>,
) -> Result<DictionaryFiles, String> {
    let search_paths = build_search_paths(dict_path);
    for dir in &search_paths {
        if let Some(files) = probe(dir, lang) {
            log::debug!("using dictionary {files:?}");
            return Ok(files);
        }
    }

    Err(format!(
        "could not find a dictionary for {lang} in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

fn read(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))
}

/// Build a handle from affix and word-list files.
pub fn load_source(aff: &Path, dic: &Path, lang: &str) -> Result<SpellHandle, String> {
    SpellHandle::from_texts(lang, &read(aff)?, &read(dic)?, &LoadOptions::default())
        .map_err(|e| format!("failed to load {}: {e}", aff.display()))
}

/// Search for dictionary files and create a SpellHandle.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `HUNLITE_DICT_PATH` environment variable
/// 3. `~/.hunlite`
/// 4. `/usr/share/hunspell`, `/usr/share/myspell`
/// 5. Current working directory
pub fn load_handle(dict_path: Option<&str>, lang: &str) -> Result<SpellHandle, String> {
    match find_dictionary(dict_path, lang, dictionary_in)? {
        DictionaryFiles::Packed(path) => SpellHandle::deserialize(&read(&path)?)
            .map_err(|e| format!("failed to load {}: {e}", path.display())),
        DictionaryFiles::Source { aff, dic } => load_source(&aff, &dic, lang),
    }
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".hunlite"));
        #[cfg(target_os = "macos")]
        paths.push(home.join("Library").join("Spelling"));
    }

    paths.push(PathBuf::from("/usr/share/hunspell"));
    paths.push(PathBuf::from("/usr/share/myspell"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse `-d/--dict-path`, `-l/--lang` and `-v/--verbose` from the command
/// line.
///
/// Returns the parsed options and the remaining arguments.
pub fn parse_common_args(args: &[String]) -> Result<(CommonArgs, Vec<String>), String> {
    let mut common = CommonArgs::default();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            common.dict_path = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--lang=") {
            common.lang = val.to_string();
        } else if arg == "--dict-path" || arg == "-d" {
            let val = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            common.dict_path = Some(val.clone());
        } else if arg == "--lang" || arg == "-l" {
            let val = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            common.lang = val.clone();
        } else if arg == "--verbose" || arg == "-v" {
            common.verbose = true;
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((common, remaining))
}

/// Initialise logging from `RUST_LOG`, defaulting to `warn` or to `debug`
/// when verbose.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn common_args_are_extracted() {
        let (common, rest) =
            parse_common_args(&args(&["-d", "/dicts", "-l", "de_DE", "-v", "-s", "word"])).unwrap();
        assert_eq!(common.dict_path.as_deref(), Some("/dicts"));
        assert_eq!(common.lang, "de_DE");
        assert!(common.verbose);
        assert_eq!(rest, args(&["-s", "word"]));
    }

    #[test]
    fn equals_forms_are_accepted() {
        let (common, rest) = parse_common_args(&args(&["--dict-path=/x", "--lang=fr"])).unwrap();
        assert_eq!(common.dict_path.as_deref(), Some("/x"));
        assert_eq!(common.lang, "fr");
        assert!(rest.is_empty());
    }

    #[test]
    fn defaults_apply() {
        let (common, _) = parse_common_args(&[]).unwrap();
        assert_eq!(common, CommonArgs::default());
        assert_eq!(common.lang, DEFAULT_LANG);
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(parse_common_args(&args(&["-d"])).is_err());
        assert!(parse_common_args(&args(&["--lang"])).is_err());
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some("/first"));
        assert_eq!(paths[0], PathBuf::from("/first"));
        assert!(paths.contains(&PathBuf::from("/usr/share/hunspell")));
    }

    #[test]
    fn packed_dictionary_is_preferred() {
        let dir = std::env::temp_dir().join(format!("hunlite-cli-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("xx.aff"), "").unwrap();
        std::fs::write(dir.join("xx.dic"), "0\n").unwrap();
        assert!(matches!(dictionary_in(&dir, "xx"), Some(DictionaryFiles::Source { .. })));

        std::fs::write(dir.join("xx.json"), "{}").unwrap();
        assert!(matches!(dictionary_in(&dir, "xx"), Some(DictionaryFiles::Packed(_))));
        assert!(matches!(source_in(&dir, "xx"), Some(DictionaryFiles::Source { .. })));
        assert!(dictionary_in(&dir, "yy").is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
