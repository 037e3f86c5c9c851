//! Operator command parsing
//!
//! One input line becomes one `Command`. Tokenization is shell-like: fields
//! split on whitespace, single or double quotes group a field, quotes must be
//! closed. Institution names regularly contain spaces, so quoting matters.

use crate::models::RecordId;
use crate::Result;
use std::path::PathBuf;

/// The closed set of operator commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load data files (empty = auto-discover well-known names)
    Load(Vec<PathBuf>),
    /// Dump data files (empty = overwrite the loaded sources)
    Dump(Vec<PathBuf>),
    /// Rename an institution
    Alias {
        old: String,
        new: String,
        issue_ids: Vec<String>,
    },
    /// Tombstone a record
    Delete {
        id: RecordId,
        issue_ids: Vec<String>,
    },
    /// Mark a record outdated
    Outdate {
        id: RecordId,
        issue_ids: Vec<String>,
    },
    /// Show records
    View(Vec<RecordId>),
    /// Render the change log
    Generate,
    /// Show the command list
    Help,
    /// Leave the editor
    Exit,
}

impl Command {
    /// Parse one input line. The line must be non-blank.
    pub fn parse(line: &str) -> Result<Command> {
        let tokens = split_args(line)?;
        let (name, args) = tokens
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("empty command"))?;

        match name.to_lowercase().as_str() {
            "load" => match args.len() {
                0 | 2 => Ok(Command::Load(args.iter().map(PathBuf::from).collect())),
                _ => anyhow::bail!("usage: load [data.csv alias.txt]"),
            },
            "dump" => {
                if args.len() > 2 {
                    anyhow::bail!("usage: dump [data.csv] [alias.txt]");
                }
                Ok(Command::Dump(args.iter().map(PathBuf::from).collect()))
            }
            "alias" => match args {
                [old, new, issue_ids @ ..] => Ok(Command::Alias {
                    old: old.clone(),
                    new: new.clone(),
                    issue_ids: issue_ids.to_vec(),
                }),
                _ => anyhow::bail!("usage: alias OLD NEW [issue...]"),
            },
            "del" => match args {
                [id, issue_ids @ ..] => Ok(Command::Delete {
                    id: RecordId::new(id.clone()),
                    issue_ids: issue_ids.to_vec(),
                }),
                _ => anyhow::bail!("usage: del ID [issue...]"),
            },
            "outdate" => match args {
                [id, issue_ids @ ..] => Ok(Command::Outdate {
                    id: RecordId::new(id.clone()),
                    issue_ids: issue_ids.to_vec(),
                }),
                _ => anyhow::bail!("usage: outdate ID [issue...]"),
            },
            "view" => {
                if args.is_empty() {
                    anyhow::bail!("usage: view ID [ID...]");
                }
                Ok(Command::View(
                    args.iter().map(|a| RecordId::new(a.clone())).collect(),
                ))
            }
            "generate" => Ok(Command::Generate),
            "help" | "?" => Ok(Command::Help),
            "exit" | "quit" => Ok(Command::Exit),
            other => anyhow::bail!("unknown command: {}", other),
        }
    }
}

/// Split a line into fields, honoring single and double quotes
pub fn split_args(line: &str) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_field = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                } else {
                    current.push(ch);
                }
            }
            None => {
                if ch == '\'' || ch == '"' {
                    quote = Some(ch);
                    in_field = true;
                } else if ch.is_whitespace() {
                    if in_field {
                        fields.push(std::mem::take(&mut current));
                        in_field = false;
                    }
                } else {
                    current.push(ch);
                    in_field = true;
                }
            }
        }
    }

    if quote.is_some() {
        anyhow::bail!("unterminated quote");
    }
    if in_field {
        fields.push(current);
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_args() {
        let fields = split_args("del 17 BUG-7").unwrap();
        assert_eq!(fields, vec!["del", "17", "BUG-7"]);
    }

    #[test]
    fn test_split_quoted_args() {
        let fields = split_args(r#"alias "Old University" 'New University' ISSUE-1"#).unwrap();
        assert_eq!(
            fields,
            vec!["alias", "Old University", "New University", "ISSUE-1"]
        );
    }

    #[test]
    fn test_split_empty_quoted_field() {
        let fields = split_args(r#"alias "" New"#).unwrap();
        assert_eq!(fields, vec!["alias", "", "New"]);
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert!(split_args(r#"alias "Old"#).is_err());
    }

    #[test]
    fn test_parse_alias() {
        let cmd = Command::parse("alias \"Old U\" \"New U\" ISSUE-1 ISSUE-2").unwrap();
        assert_eq!(
            cmd,
            Command::Alias {
                old: "Old U".to_string(),
                new: "New U".to_string(),
                issue_ids: vec!["ISSUE-1".to_string(), "ISSUE-2".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_del_without_issues() {
        let cmd = Command::parse("del 42").unwrap();
        assert_eq!(
            cmd,
            Command::Delete {
                id: RecordId::new("42"),
                issue_ids: vec![],
            }
        );
    }

    #[test]
    fn test_parse_load_arity() {
        assert_eq!(Command::parse("load").unwrap(), Command::Load(vec![]));
        assert!(Command::parse("load one.csv").is_err());
        assert!(Command::parse("load a.csv b.txt").is_ok());
    }

    #[test]
    fn test_parse_dump_arity() {
        assert!(Command::parse("dump a.csv b.txt c.txt").is_err());
    }

    #[test]
    fn test_parse_view_requires_ids() {
        assert!(Command::parse("view").is_err());
        assert_eq!(
            Command::parse("view 1 2").unwrap(),
            Command::View(vec![RecordId::new("1"), RecordId::new("2")])
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("GENERATE").unwrap(), Command::Generate);
        assert_eq!(Command::parse("Exit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse("frobnicate 1").unwrap_err();
        assert!(err.to_string().contains("frobnicate"));
    }
}
