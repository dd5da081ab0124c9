//! Declarative command hierarchy: command spaces, commands, arguments and
//! options. Loaded from JSON or chained together in code.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definitions {
    #[serde(default)]
    pub spaces: Vec<SpaceDef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpaceDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub commands: Vec<CommandDef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub subcommands: Vec<CommandDef>,
    #[serde(default)]
    pub arguments: Vec<ParamDef>,
    #[serde(default)]
    pub options: Vec<ParamDef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParamDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hidden: bool,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn space(mut self, space: SpaceDef) -> Self {
        self.spaces.push(space);
        self
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl SpaceDef {
    pub fn new(name: &str) -> Self {
        SpaceDef {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn command(mut self, cmd: CommandDef) -> Self {
        self.commands.push(cmd);
        self
    }
}

impl CommandDef {
    pub fn new(name: &str) -> Self {
        CommandDef {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn subcommand(mut self, cmd: CommandDef) -> Self {
        self.subcommands.push(cmd);
        self
    }

    pub fn argument(mut self, name: &str) -> Self {
        self.arguments.push(ParamDef::new(name));
        self
    }

    pub fn option(mut self, name: &str) -> Self {
        self.options.push(ParamDef::new(name));
        self
    }

    pub fn param(mut self, param: ParamDef, is_option: bool) -> Self {
        if is_option {
            self.options.push(param);
        } else {
            self.arguments.push(param);
        }
        self
    }
}

impl ParamDef {
    pub fn new(name: &str) -> Self {
        ParamDef {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Hierarchy used when no definition file is given.
pub fn demo_definitions() -> Definitions {
    let main = CommandDef::new("main")
        .description("register a user")
        .argument("ID")
        .argument("birthdate")
        .argument("Email")
        .argument("numbers")
        .param(ParamDef::new("--wedding-date").description("date of wedding"), true)
        .param(ParamDef::new("--weight").description("weight in kg"), true)
        .param(ParamDef::new("--working-days"), true)
        .subcommand(CommandDef::new("inspect").description("show a stored user").argument("ID"));

    let mut defs = Definitions::new().space(
        SpaceDef::new("demo")
            .description("sample command space")
            .command(main)
            .command(CommandDef::new("ping").description("check the shell is alive")),
    );
    for name in ["test", "try", "triff", "teck", "super", "slut", "slick"] {
        defs = defs.space(SpaceDef::new(name).command(CommandDef::new("run")));
    }
    defs
}
