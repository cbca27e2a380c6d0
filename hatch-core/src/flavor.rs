//! Frontend flavors offered by create-vite.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Frontend framework template used for the web skeleton.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Vanilla,
    #[default]
    React,
    Preact,
    Svelte,
    Qwik,
}

impl Flavor {
    /// All flavors, in prompt order.
    pub const ALL: [Flavor; 5] = [
        Flavor::Vanilla,
        Flavor::React,
        Flavor::Preact,
        Flavor::Svelte,
        Flavor::Qwik,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Vanilla => "vanilla",
            Flavor::React => "react",
            Flavor::Preact => "preact",
            Flavor::Svelte => "svelte",
            Flavor::Qwik => "qwik",
        }
    }

    /// Human-readable name for prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Flavor::Vanilla => "Vanilla",
            Flavor::React => "React",
            Flavor::Preact => "Preact",
            Flavor::Svelte => "Svelte",
            Flavor::Qwik => "Qwik",
        }
    }

    /// The `--template` id passed to create-vite (TypeScript variants).
    pub fn vite_template(&self) -> &'static str {
        match self {
            Flavor::Vanilla => "vanilla-ts",
            Flavor::React => "react-swc-ts",
            Flavor::Preact => "preact-ts",
            Flavor::Svelte => "svelte-ts",
            Flavor::Qwik => "qwik-ts",
        }
    }

    /// Import line and call expression of the framework's Vite plugin, if any.
    pub fn vite_plugin(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Flavor::Vanilla => None,
            Flavor::React => Some(("import react from '@vitejs/plugin-react-swc'", "react()")),
            Flavor::Preact => Some(("import preact from '@preact/preset-vite'", "preact()")),
            Flavor::Svelte => Some((
                "import { svelte } from '@sveltejs/vite-plugin-svelte'",
                "svelte()",
            )),
            Flavor::Qwik => Some((
                "import { qwikVite } from '@builder.io/qwik/optimizer'",
                "qwikVite({ csr: true })",
            )),
        }
    }

    /// Global stylesheet of the template, relative to the web project root.
    pub fn stylesheet(&self) -> &'static str {
        match self {
            Flavor::Vanilla | Flavor::Preact => "src/style.css",
            Flavor::React | Flavor::Qwik => "src/index.css",
            Flavor::Svelte => "src/app.css",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vanilla" | "vanilla-ts" => Ok(Flavor::Vanilla),
            "react" | "react-ts" | "react-swc-ts" => Ok(Flavor::React),
            "preact" | "preact-ts" => Ok(Flavor::Preact),
            "svelte" | "svelte-ts" => Ok(Flavor::Svelte),
            "qwik" | "qwik-ts" => Ok(Flavor::Qwik),
            _ => Err(format!(
                "unknown flavor '{}', expected one of: vanilla, react, preact, svelte, qwik",
                s
            )),
        }
    }
}
