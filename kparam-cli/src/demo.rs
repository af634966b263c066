use ansi_term::Colour::Blue;
use anyhow::Result;
use kparam_core::{ArraySpec, Elements, Param, ParamError, ParamRegistry, ParamReport};

use crate::config::OutputFormat;

const PROGRAM: &str = "kparam demo";

/// Storage behind the demo registry.
pub struct DemoParams {
    test: i32,
    btest: bool,
    latest: [i64; 10],
    latest_num: usize,
    strtest: String,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            test: 0,
            btest: true,
            latest: [0; 10],
            latest_num: 0,
            strtest: String::new(),
        }
    }
}

impl DemoParams {
    fn registry(&mut self) -> ParamRegistry<'_> {
        let mut registry = ParamRegistry::with_capacity(4);
        registry
            .declare(Param::int("test", &mut self.test))
            .declare(Param::bool("btest", &mut self.btest))
            .declare(Param::array(
                "latest",
                ArraySpec::new(Elements::Long(&mut self.latest)).with_count(&mut self.latest_num),
            ))
            .declare(Param::string("strtest", &mut self.strtest, 10));
        registry
    }

    /// Parse `argv` and report every parameter, or explain the first
    /// failure together with the usage line.
    pub fn parse(&mut self, argv: &[String]) -> std::result::Result<Vec<ParamReport>, (ParamError, String)> {
        let mut registry = self.registry();
        match registry.parse(argv, None) {
            Ok(()) => Ok(registry.report()),
            Err(err) => Err((err, registry.usage(PROGRAM))),
        }
    }
}

pub fn render(report: &[ParamReport], format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(report
            .iter()
            .map(|entry| {
                let name = if color {
                    Blue.bold().paint(entry.name.as_str()).to_string()
                } else {
                    entry.name.clone()
                };
                format!("{} = {}", name, entry.value)
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn run(argv: &[String], format: OutputFormat) -> Result<()> {
    let mut params = DemoParams::default();
    match params.parse(argv) {
        Ok(report) => {
            println!("{}", render(&report, format, format == OutputFormat::Text)?);
            Ok(())
        }
        Err((err, usage)) => {
            eprintln!("{}", usage);
            Err(err.into())
        }
    }
}
