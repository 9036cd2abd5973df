use crate::config::{DEFAULT_DEGREE, PolymerConfig};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub notation: Option<String>,
    pub degree: usize,
    pub strict: bool,
    pub json: bool,
    pub batch: Option<String>,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut notation = None;
        let mut degree = None;
        let mut strict = false;
        let mut json = false;
        let mut batch = None;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--degree" | "-n" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--degree requires a value".to_string())?;
                    set_degree(&mut degree, value)?;
                }
                "--batch" => {
                    batch = Some(
                        iter.next()
                            .ok_or_else(|| "--batch requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--strict" => strict = true,
                "--json" => json = true,
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                value if notation.is_none() && batch.is_none() => {
                    notation = Some(value.to_string());
                }
                value => set_degree(&mut degree, value)?,
            }
        }
        match (&notation, &batch) {
            (Some(_), Some(_)) => {
                return Err("--batch cannot be combined with a SMILES argument".to_string());
            }
            (None, None) => return Err("missing SMILES argument".to_string()),
            _ => {}
        }
        Ok(Self {
            notation,
            degree: degree.unwrap_or(DEFAULT_DEGREE),
            strict,
            json,
            batch,
        })
    }

    pub fn polymer_config(&self) -> PolymerConfig {
        let config = PolymerConfig::new(self.degree);
        if self.strict { config.strict() } else { config }
    }

    pub fn help() -> &'static str {
        "Usage: polychain [--strict] [--json] <SMILES> [DEGREE]\n       \
         polychain [--strict] [--json] [--degree N] --batch PATH\n"
    }
}

fn set_degree(slot: &mut Option<usize>, value: &str) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("degree given more than once ({value})"));
    }
    match value.parse::<usize>() {
        Ok(degree) if degree > 0 => {
            *slot = Some(degree);
            Ok(())
        }
        _ => Err(format!("degree must be a positive integer, got {value}")),
    }
}
