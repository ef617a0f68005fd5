//! Flags and helpers shared by every command.

use std::path::{Path, PathBuf};

use pattex::{ColorSelection, CustomColor, Session};

use super::session_file::SessionFile;

const PATTERN_CANDIDATES: [&str; 3] = ["assets/patterns.xml", "../assets/patterns.xml", "../../assets/patterns.xml"];
const COLOR_CANDIDATES: [&str; 3] = ["assets/colors.json", "../assets/colors.json", "../../assets/colors.json"];

/// Catalog and session flags accepted by all commands.
#[derive(Debug, Default, Clone)]
pub struct CommonArgs {
    pub patterns: Option<PathBuf>,
    pub colors: Option<PathBuf>,
    pub session: Option<PathBuf>,
    pub verbose: bool,
    /// Arguments not consumed here, in order
    pub rest: Vec<String>,
}

impl CommonArgs {
    /// Pull the shared flags out of `args`, leaving the rest for the command.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut parsed = CommonArgs::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--patterns" => parsed.patterns = Some(PathBuf::from(value(args, &mut i)?)),
                "--colors" => parsed.colors = Some(PathBuf::from(value(args, &mut i)?)),
                "--session" => parsed.session = Some(PathBuf::from(value(args, &mut i)?)),
                "-v" | "--verbose" => parsed.verbose = true,
                other => parsed.rest.push(other.to_string()),
            }
            i += 1;
        }
        Ok(parsed)
    }

    /// The session file named by `--session`, if any.
    pub fn session_file(&self) -> Result<Option<SessionFile>, String> {
        self.session.as_deref().map(SessionFile::load).transpose()
    }

    /// Catalog paths: flags first, then the session file, then defaults.
    pub fn catalog_paths(&self, file: Option<&SessionFile>) -> Result<(PathBuf, PathBuf), String> {
        let patterns = self
            .patterns
            .clone()
            .or_else(|| file.and_then(|f| f.patterns.clone()))
            .or_else(|| find_default(&PATTERN_CANDIDATES))
            .ok_or("no pattern catalog given and no default found (use --patterns <file>)")?;
        let colors = self
            .colors
            .clone()
            .or_else(|| file.and_then(|f| f.colors.clone()))
            .or_else(|| find_default(&COLOR_CANDIDATES))
            .ok_or("no color catalog given and no default found (use --colors <file>)")?;
        Ok((patterns, colors))
    }

    /// Load both catalogs and apply any saved selection.
    ///
    /// Also returns the catalog paths actually used, so a saved session
    /// points at the same files even when they came from `--session`.
    pub fn open_session(&self) -> Result<(Session, (PathBuf, PathBuf)), String> {
        let file = self.session_file()?;
        let (patterns, colors) = self.catalog_paths(file.as_ref())?;
        log::info!("loading {} + {}", patterns.display(), colors.display());

        let mut session = Session::load(&patterns, &colors).map_err(|e| e.to_string())?;
        if let Some(file) = &file {
            file.apply(&mut session)?;
        }
        Ok((session, (patterns, colors)))
    }
}

/// Value following the flag at `*i`, advancing `i`.
pub fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} needs a value", flag))
}

fn find_default(candidates: &[&str]) -> Option<PathBuf> {
    candidates.iter().map(Path::new).find(|p| p.exists()).map(Path::to_path_buf)
}

/// Parse a color argument.
///
/// `#rgb`/`#rrggbb` and `r,g,b` become custom colors; anything else is a
/// catalog id.
pub fn parse_color_arg(arg: &str) -> ColorSelection {
    let arg = arg.trim();
    if arg.starts_with('#') {
        return ColorSelection::Custom(CustomColor::from_hex(arg));
    }
    let parts: Vec<&str> = arg.split(',').collect();
    if let [r, g, b] = parts[..] {
        return ColorSelection::Custom(CustomColor::from_fields("", r, g, b));
    }
    ColorSelection::preset(arg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pattex::Rgb;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn shared_flags_are_extracted() {
        let parsed = CommonArgs::parse(&args(&["-p", "dots1", "--colors", "c.json", "-v", "-o", "x.png"])).unwrap();
        assert_eq!(parsed.colors, Some(PathBuf::from("c.json")));
        assert!(parsed.verbose);
        assert_eq!(parsed.rest, args(&["-p", "dots1", "-o", "x.png"]));
    }

    #[test]
    fn flag_without_value_is_an_error() {
        assert!(CommonArgs::parse(&args(&["--patterns"])).is_err());
    }

    #[test]
    fn catalog_paths_fall_back_to_session_file() {
        let file = SessionFile {
            patterns: Some(PathBuf::from("/saved/patterns.xml")),
            colors: Some(PathBuf::from("/saved/colors.json")),
            ..SessionFile::default()
        };
        let plain = CommonArgs::default();
        assert_eq!(
            plain.catalog_paths(Some(&file)).unwrap(),
            (PathBuf::from("/saved/patterns.xml"), PathBuf::from("/saved/colors.json"))
        );

        let flagged = CommonArgs { colors: Some(PathBuf::from("c.json")), ..CommonArgs::default() };
        let (patterns, colors) = flagged.catalog_paths(Some(&file)).unwrap();
        assert_eq!(patterns, PathBuf::from("/saved/patterns.xml"));
        assert_eq!(colors, PathBuf::from("c.json"));
    }

    #[test]
    fn color_arguments() {
        assert_eq!(parse_color_arg("red"), ColorSelection::preset("red"));
        assert_eq!(parse_color_arg("#00f"), ColorSelection::Custom(CustomColor::from_hex("#00f")));
        match parse_color_arg("10, 20, 999") {
            ColorSelection::Custom(c) => assert_eq!(c.color(), Rgb::new(10, 20, 255)),
            other => panic!("expected custom, got {:?}", other),
        }
    }
}
