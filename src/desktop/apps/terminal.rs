//! Terminal - A canned zsh session with a scrollback history

use chrono::{DateTime, Local};
use egui::{Color32, Key, RichText, Rounding, ScrollArea, TextEdit, TextStyle, Ui};

pub const USERNAME: &str = "user";
pub const HOSTNAME: &str = "MacEmu";

const HELP: &str = "Available commands:
  help     - Show this help message
  ls       - List directory contents
  pwd      - Print working directory
  whoami   - Print current user
  date     - Print current date and time
  echo     - Print arguments
  clear    - Clear terminal
  uname    - Print system information
  uptime   - Show system uptime
  neofetch - Display system information";

const LISTING: &str =
    "Applications  Desktop  Documents  Downloads  Library  Movies  Music  Pictures  Public";

const UNAME_ALL: &str = "Darwin MacEmu.local 23.0.0 Darwin Kernel Version 23.0.0: \
root:xnu-10002.1.13~1/RELEASE_ARM64_T6000 arm64";

const UPTIME: &str = " 10:42  up 2 days, 14:32, 2 users, load averages: 1.42 1.58 1.67";

/// What running a command does to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Output(String),
    Clear,
}

/// One submitted line. The login banner has no command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub command: Option<String>,
    pub output: String,
}

#[derive(Debug)]
pub struct Terminal {
    history: Vec<HistoryEntry>,
    input: String,
}

impl Terminal {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            history: vec![HistoryEntry {
                command: None,
                output: format!("Last login: {} on ttys000", now.format("%a %b %e %H:%M:%S")),
            }],
            input: String::new(),
        }
    }

    pub fn submit(&mut self, line: &str, now: DateTime<Local>) {
        match run_command(line, now) {
            Response::Clear => self.history.clear(),
            Response::Output(output) => self.history.push(HistoryEntry {
                command: Some(line.trim().to_string()),
                output,
            }),
        }
    }

    fn prompt(ui: &mut Ui) {
        ui.label(RichText::new(format!("{USERNAME}@{HOSTNAME}")).color(Color32::from_rgb(96, 165, 250)));
        ui.label(RichText::new(":").color(Color32::WHITE));
        ui.label(RichText::new("~").color(Color32::from_rgb(34, 211, 238)));
        ui.label(RichText::new("$").color(Color32::WHITE));
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.painter()
            .rect_filled(ui.max_rect(), Rounding::same(4.0), Color32::BLACK);
        ui.style_mut().override_text_style = Some(TextStyle::Monospace);
        ui.spacing_mut().item_spacing.x = 0.0;

        let mut submitted = None;
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for entry in &self.history {
                    if let Some(command) = &entry.command {
                        ui.horizontal(|ui| {
                            Self::prompt(ui);
                            ui.label(RichText::new(format!(" {command}")).color(Color32::WHITE));
                        });
                    }
                    if !entry.output.is_empty() {
                        ui.label(RichText::new(&entry.output).color(Color32::WHITE));
                    }
                }
                ui.horizontal(|ui| {
                    Self::prompt(ui);
                    ui.label(" ");
                    let response = ui.add(
                        TextEdit::singleline(&mut self.input)
                            .frame(false)
                            .text_color(Color32::WHITE)
                            .desired_width(f32::INFINITY),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        submitted = Some(std::mem::take(&mut self.input));
                        response.request_focus();
                    }
                });
            });

        if let Some(line) = submitted {
            self.submit(&line, Local::now());
        }
    }
}

/// Run one command line. The command name is case-insensitive.
pub fn run_command(line: &str, now: DateTime<Local>) -> Response {
    let mut args = line.split_whitespace();
    let command = args.next().unwrap_or_default().to_lowercase();
    let output = match command.as_str() {
        "" => String::new(),
        "help" => HELP.into(),
        "ls" => LISTING.into(),
        "pwd" => format!("/Users/{USERNAME}"),
        "whoami" => USERNAME.into(),
        "date" => now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string(),
        "echo" => args.collect::<Vec<_>>().join(" "),
        "clear" => return Response::Clear,
        "uname" => match args.next() {
            Some("-a") => UNAME_ALL.into(),
            _ => "Darwin".into(),
        },
        "uptime" => UPTIME.into(),
        "neofetch" => neofetch(),
        other => format!("zsh: command not found: {other}"),
    };
    Response::Output(output)
}

fn neofetch() -> String {
    let user = USERNAME;
    let host = HOSTNAME;
    format!(
        r#"                    'c.          {user}@{host}
                 ,xNMM.          ---------------
               .OMMMMo           OS: macOS 14.0 Sonoma arm64
               OMMM0,            Host: MacBook Pro (14-inch, 2023)
     .;loddo:' loolloddol;.      Kernel: 23.0.0
   cKMMMMMMMMMMNWMMMMMMMMMM0:    Uptime: 2 days, 14 hours
 .KMMMMMMMMMMMMMMMMMMMMMMMWd.    Packages: 142 (brew)
 XMMMMMMMMMMMMMMMMMMMMMMMX.      Shell: zsh 5.9
;MMMMMMMMMMMMMMMMMMMMMMMM:       Resolution: 3024x1964
:MMMMMMMMMMMMMMMMMMMMMMMM:       Terminal: {host} Terminal
.MMMMMMMMMMMMMMMMMMMMMMMMX.      CPU: Apple M3 Pro
 kMMMMMMMMMMMMMMMMMMMMMMMMWd.    Memory: 8192MiB / 16384MiB
 .XMMMMMMMMMMMMMMMMMMMMMMMMMMk
  .XMMMMMMMMMMMMMMMMMMMMMMMMK.
    kMMMMMMMMMMMMMMMMMMMMMMd
     ;KMMMMMMMWXXWMMMMMMMk.
       .coeli;,  .:lodl:."#
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 10, 42, 0).unwrap()
    }

    fn output(line: &str) -> String {
        match run_command(line, now()) {
            Response::Output(text) => text,
            Response::Clear => panic!("{line} cleared the screen"),
        }
    }

    #[test]
    fn help_lists_every_command() {
        let help = output("help");
        for command in [
            "help", "ls", "pwd", "whoami", "date", "echo", "clear", "uname", "uptime", "neofetch",
        ] {
            assert!(help.contains(&format!("  {command} ")), "{command} missing");
        }
    }

    #[test]
    fn fixed_commands_print_canned_output() {
        assert_eq!(output("ls"), LISTING);
        assert_eq!(output("pwd"), "/Users/user");
        assert_eq!(output("whoami"), "user");
        assert_eq!(output("uname"), "Darwin");
        assert!(output("uname -a").starts_with("Darwin MacEmu.local 23.0.0"));
        assert_eq!(output("uptime"), UPTIME);
        assert!(output("neofetch").contains("user@MacEmu"));
        assert!(output("neofetch").contains("OS: macOS 14.0 Sonoma arm64"));
    }

    #[test]
    fn date_uses_the_supplied_clock() {
        assert!(output("date").starts_with("Mon Oct 19 2026 10:42:00 GMT"));
    }

    #[test]
    fn echo_joins_arguments() {
        assert_eq!(output("echo hello   world"), "hello world");
        assert_eq!(output("echo"), "");
    }

    #[test]
    fn command_names_ignore_case_and_unknowns_report() {
        assert_eq!(output("  PWD "), "/Users/user");
        assert_eq!(output("Vim notes.txt"), "zsh: command not found: vim");
        assert_eq!(output("   "), "");
        assert_eq!(run_command("clear", now()), Response::Clear);
    }

    #[test]
    fn submit_records_history_and_clear_empties_it() {
        let mut terminal = Terminal::new(now());
        assert_eq!(terminal.history.len(), 1);
        assert_eq!(terminal.history[0].command, None);
        assert!(terminal.history[0].output.starts_with("Last login: Mon Oct 19 10:42:00"));

        terminal.submit("whoami", now());
        assert_eq!(
            terminal.history[1],
            HistoryEntry {
                command: Some("whoami".into()),
                output: "user".into(),
            }
        );

        terminal.submit("clear", now());
        assert!(terminal.history.is_empty());
        terminal.submit("pwd", now());
        assert_eq!(terminal.history.len(), 1);
    }
}
