//! Workflows and the registry that maps subcommand names to them
//!
//! - [`verify`] - Built-in configuration check
//! - [`list_accounts`] - Account listing (API call not wired yet)
//!
//! The registry is built explicitly by [`default_registry`] before the
//! dispatcher runs, and only read afterwards.

pub mod list_accounts;
pub mod verify;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use cyberark_core::Config;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

pub use list_accounts::ListAccountsWorkflow;
pub use verify::VerifyWorkflow;

/// A named unit of CLI-invoked logic.
///
/// `execute` receives the loaded configuration, the arguments following
/// the subcommand name, and the sink for normal output. `help` returns a
/// one-line summary for the global usage listing.
#[async_trait]
pub trait Workflow: Send + Sync {
    async fn execute(
        &self,
        config: &Config,
        args: &[String],
        out: &mut (dyn Write + Send),
    ) -> Result<()>;

    fn help(&self) -> &str;
}

/// Subcommand name to workflow mapping.
///
/// Registering a name twice keeps the second handler.
#[derive(Default)]
pub struct WorkflowRegistry {
    workflows: BTreeMap<String, Box<dyn Workflow>>,
}

impl WorkflowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `workflow` under `name`, replacing any earlier entry.
    pub fn register<W>(&mut self, name: impl Into<String>, workflow: W)
    where
        W: Workflow + 'static,
    {
        let name = name.into();
        if self.workflows.insert(name.clone(), Box::new(workflow)).is_some() {
            tracing::debug!(workflow = %name, "replaced existing workflow registration");
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&dyn Workflow> {
        self.workflows.get(name).map(|w| w.as_ref())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.workflows.keys().map(String::as_str)
    }

    /// Registered entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Workflow)> {
        self.workflows
            .iter()
            .map(|(name, workflow)| (name.as_str(), workflow.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

impl fmt::Debug for WorkflowRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Build the registry with every workflow shipped in this crate.
pub fn default_registry() -> WorkflowRegistry {
    let mut registry = WorkflowRegistry::new();
    verify::register(&mut registry);
    list_accounts::register(&mut registry);
    registry
}

/// Parse workflow-specific flags, using `name` as the program name in
/// clap's error messages.
pub(crate) fn parse_args<P: Parser>(name: &str, args: &[String]) -> Result<P> {
    let argv = std::iter::once(name).chain(args.iter().map(String::as_str));
    Ok(P::try_parse_from(argv)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    #[async_trait]
    impl Workflow for Named {
        async fn execute(
            &self,
            _config: &Config,
            _args: &[String],
            out: &mut (dyn Write + Send),
        ) -> Result<()> {
            writeln!(out, "{}", self.0)?;
            Ok(())
        }

        fn help(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_lookup_missing_name() {
        let registry = WorkflowRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup("verify").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = WorkflowRegistry::new();
        registry.register("sync", Named("first"));
        registry.register("sync", Named("second"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("sync").unwrap().help(), "second");
    }

    #[tokio::test]
    async fn test_registered_workflow_executes() {
        let mut registry = WorkflowRegistry::new();
        registry.register("hello", Named("hello there"));

        let mut out = Vec::new();
        registry
            .lookup("hello")
            .unwrap()
            .execute(&Config::default(), &[], &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello there\n");
    }

    #[test]
    fn test_names_are_sorted() {
        let mut registry = WorkflowRegistry::new();
        registry.register("zeta", Named("z"));
        registry.register("alpha", Named("a"));
        registry.register("mid", Named("m"));

        assert_eq!(registry.names().collect::<Vec<_>>(), ["alpha", "mid", "zeta"]);
        assert_eq!(format!("{:?}", registry), r#"{"alpha", "mid", "zeta"}"#);
    }

    #[test]
    fn test_default_registry_contents() {
        let registry = default_registry();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            ["list-accounts", "verify"]
        );
        assert_eq!(
            registry.lookup("verify").unwrap().help(),
            "Verify API connectivity"
        );
    }

    #[test]
    fn test_parse_args_reports_unknown_flag() {
        #[derive(Parser, Debug)]
        struct Flags {
            #[arg(long)]
            safe: Option<String>,
        }

        let ok: Flags = parse_args("demo", &["--safe".into(), "Prod".into()]).unwrap();
        assert_eq!(ok.safe.as_deref(), Some("Prod"));

        let err = parse_args::<Flags>("demo", &["--bogus".into()]).unwrap_err();
        assert!(err.to_string().contains("--bogus"));
    }
}
