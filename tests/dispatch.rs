use consolar::{
    AppConfig, ColorChoice, Command, Consolar, ConsolarError, Context, Outcome, Result,
    SeparatorStyle, Status, Step,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Records what it saw so tests can look at the invocation after dispatch.
#[derive(Clone, Default)]
struct Recorder {
    ran: Rc<Cell<bool>>,
    args: Rc<RefCell<Vec<String>>>,
    named: Rc<RefCell<Option<String>>>,
}

struct Generate {
    recorder: Recorder,
}

impl Command for Generate {
    fn run(&mut self, ctx: &mut Context<'_>) -> Result<()> {
        ctx.require_args(&["seed"])?;
        self.recorder.ran.set(true);
        *self.recorder.args.borrow_mut() = ctx.args().to_vec();
        *self.recorder.named.borrow_mut() = ctx.named_arg("seed").map(String::from);
        ctx.log_step("Generating");
        ctx.log_success("Done.");
        Ok(())
    }

    fn render_help(&self, ctx: &Context<'_>) -> Result<String> {
        ctx.render("Usage: {{ name | lower }} {{ cmd }} <seed>", &ctx.help_context())
    }
}

struct Broken;

impl Command for Broken {
    fn run(&mut self, _ctx: &mut Context<'_>) -> Result<()> {
        Err(ConsolarError::command("disk on fire"))
    }

    fn render_help(&self, _ctx: &Context<'_>) -> Result<String> {
        Ok("broken help".to_string())
    }
}

/// Reads its greeting in `init`, so both `run` and `render_help` see it.
struct Greet {
    greeting: String,
}

impl Command for Greet {
    fn init(&mut self, ctx: &mut Context<'_>) -> Result<()> {
        self.greeting = ctx
            .opt("greeting")
            .map(|value| value.to_string())
            .unwrap_or_else(|| "Hello".to_string());
        Ok(())
    }

    fn run(&mut self, ctx: &mut Context<'_>) -> Result<()> {
        let line = format!("{}!", self.greeting);
        ctx.log(line);
        Ok(())
    }

    fn render_help(&self, _ctx: &Context<'_>) -> Result<String> {
        Ok(format!("Says {}.", self.greeting))
    }
}

fn config() -> AppConfig {
    AppConfig::new("MyApp")
        .version("1.4.0")
        .color(ColorChoice::Never)
        .help_template(concat!(
            "{{ name }} {{ version }}\n",
            "{% for c in commands %}{{ c.name }}\n{% endfor %}",
        ))
}

fn app(config: AppConfig, recorder: &Recorder) -> Consolar {
    let recorder = recorder.clone();
    Consolar::new(config)
        .unwrap()
        .command("generate:password", "Make one up", move || Generate {
            recorder: recorder.clone(),
        })
        .command("broken", "Always fails", || Broken)
}

#[test]
fn test_version() {
    let report = app(config(), &Recorder::default()).dispatch(["--version"]);
    assert_eq!(report.step, Step::ShowVersion);
    assert_eq!(report.outcome, Outcome::Version("1.4.0".into()));
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_empty_input_lists_commands() {
    let report = app(config(), &Recorder::default()).dispatch(Vec::<String>::new());
    assert_eq!(report.step, Step::ShowGeneralHelp);
    assert_eq!(
        report.outcome,
        Outcome::Help("MyApp 1.4.0\nbroken\ngenerate:password\n".into())
    );
}

#[test]
fn test_prefixed_and_namespaced_spellings_find_the_same_command() {
    for command in [
        "generate:password",
        "generate-password",
        "myapp-generate:password",
    ] {
        let recorder = Recorder::default();
        let report = app(config(), &recorder).dispatch([command, "abc123"]);
        assert_eq!(report.status(), Status::Success, "{}", command);
        assert_eq!(*recorder.args.borrow(), vec!["abc123".to_string()]);
        assert_eq!(recorder.named.borrow().as_deref(), Some("abc123"));
    }
}

#[test]
fn test_path_separator_and_custom_prefix() {
    let recorder = Recorder::default();
    let config = config()
        .command_prefix("tools")
        .separator(SeparatorStyle::Path);
    let consolar = app(config, &recorder);

    assert!(consolar.registry().contains("tools-generate:password"));
    let report = consolar.dispatch(["generate:password", "abc123"]);
    assert_eq!(report.status(), Status::Success);
    assert!(recorder.ran.get());
}

#[test]
fn test_messages_are_collected() {
    let report = app(config(), &Recorder::default()).dispatch(["generate:password", "x"]);
    let contents: Vec<&str> = report.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["1 Generating...", "Done."]);
}

#[test]
fn test_validation_failure_stops_before_work() {
    let recorder = Recorder::default();
    let report = app(config(), &recorder).dispatch(["generate:password"]);

    assert!(!recorder.ran.get());
    assert_eq!(report.exit_code(), 1);
    assert_eq!(
        report.outcome,
        Outcome::Failure {
            status: Status::Failure,
            message: "Missing required arguments.".into(),
            details: vec!["seed".into()],
            help: Some("Usage: myapp generate:password <seed>".into()),
        }
    );
}

#[test]
fn test_handler_error_is_reported_verbatim() {
    let report = app(config(), &Recorder::default()).dispatch(["broken"]);
    assert_eq!(report.exit_code(), 1);
    match report.outcome {
        Outcome::Failure { message, help, .. } => {
            assert_eq!(message, "disk on fire");
            assert_eq!(help, None);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_unknown_command_halts() {
    let consolar = app(config(), &Recorder::default());

    let report = consolar.dispatch(["nope"]);
    assert_eq!(report.step, Step::RunCommand);
    assert_eq!(report.exit_code(), 255);

    let report = consolar.dispatch(["nope", "--help"]);
    assert_eq!(report.step, Step::ShowCommandHelp);
    assert_eq!(report.exit_code(), 255);
}

#[test]
fn test_command_help() {
    let report = app(config(), &Recorder::default()).dispatch(["-h", "generate:password"]);
    assert_eq!(report.step, Step::ShowCommandHelp);
    assert_eq!(
        report.outcome,
        Outcome::Help("Usage: myapp generate:password <seed>".into())
    );
}

#[test]
fn test_help_flag_in_any_case_keeps_the_command() {
    let report = app(config(), &Recorder::default()).dispatch(["--Help", "generate:password"]);
    assert_eq!(report.step, Step::ShowCommandHelp);
    assert_eq!(
        report.outcome,
        Outcome::Help("Usage: myapp generate:password <seed>".into())
    );
}

#[test]
fn test_init_runs_before_run_and_help() {
    let consolar = Consolar::new(config())
        .unwrap()
        .command("greet", "Say hello", || Greet {
            greeting: String::new(),
        });

    let report = consolar.dispatch(["greet", "--greeting", "Howdy"]);
    assert_eq!(report.messages[0].content, "Howdy!");

    let report = consolar.dispatch(["greet", "--help"]);
    assert_eq!(report.outcome, Outcome::Help("Says Hello.".into()));
}

#[test]
fn test_pinned_command() {
    let recorder = Recorder::default();
    let consolar = app(config().pinned_command("generate:password"), &recorder);

    let report = consolar.dispatch(["abc123"]);
    assert_eq!(report.status(), Status::Success);
    assert_eq!(recorder.named.borrow().as_deref(), Some("abc123"));

    let report = consolar.dispatch(["--help"]);
    assert_eq!(report.step, Step::ShowCommandHelp);
}

#[test]
fn test_console_input_overrides_process_arguments() {
    let config = config().console_input(["generate:password", "zz"]);
    assert_eq!(config.input(), vec!["generate:password", "zz"]);
}

#[test]
fn test_help_file_from_base_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("help.txt"),
        "{{ name | primary }} has {{ commands | length }} commands",
    )
    .unwrap();
    let config = AppConfig::new("FileApp")
        .base_path(dir.path())
        .color(ColorChoice::Never);

    let report = app(config, &Recorder::default()).dispatch(["--help"]);
    assert_eq!(report.outcome, Outcome::Help("FileApp has 2 commands".into()));
}

#[test]
fn test_missing_help_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::new("FileApp")
        .base_path(dir.path())
        .color(ColorChoice::Never);

    let report = app(config, &Recorder::default()).dispatch(Vec::<String>::new());
    assert_eq!(report.exit_code(), 1);
}
