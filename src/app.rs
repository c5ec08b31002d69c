use crate::config::Config;
use crate::io::{BatchFileOperator, BatchReport, FileSystem, RealFileSystem};
use crate::state::{NavigationState, SelectionSet};
use bytesize::ByteSize;
use chrono::{DateTime, Local};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// The interactive menu loop. Owns one navigation/selection/operator trio
/// and drives them from stdin, one action per turn.
pub struct App<F: FileSystem> {
    nav: NavigationState,
    selection: SelectionSet,
    operator: BatchFileOperator<F>,
    config: Config,
}

impl App<RealFileSystem> {
    pub fn new(config: Config, start_path: PathBuf) -> Self {
        Self {
            nav: NavigationState::new(start_path),
            selection: SelectionSet::new(config.ui.show_hidden),
            operator: BatchFileOperator::new(RealFileSystem::new(config.ops.use_trash)),
            config,
        }
    }
}

impl<F: FileSystem> App<F> {
    pub fn run(&mut self) -> io::Result<()> {
        self.display_directory();

        loop {
            println!();
            println!("--- File Explorer ---");
            println!("1. Display Directory");
            println!("2. Navigate");
            println!("3. Go to Parent Directory");
            println!("4. Select Files");
            println!("5. Copy");
            println!("6. Move");
            println!("7. Delete");
            println!("8. Quit");
            println!("b. Back   f. Forward   h. Toggle hidden files");

            let Some(choice) = read_line("Your choice: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.display_directory(),
                "2" => self.navigate()?,
                "3" => {
                    if self.nav.go_to_parent().is_none() {
                        println!("Already at the filesystem root");
                    }
                    self.display_directory();
                }
                "4" => self.select_files()?,
                "5" => {
                    if let Some(dest) = read_line("Enter destination path for copying: ")? {
                        let report = self
                            .operator
                            .copy_files(&mut self.selection, Path::new(&dest));
                        print_report(&report);
                    }
                }
                "6" => {
                    if let Some(dest) = read_line("Enter destination path for moving: ")? {
                        let report = self
                            .operator
                            .move_files(&mut self.selection, Path::new(&dest));
                        print_report(&report);
                    }
                }
                "7" => {
                    let report = self.operator.delete_files(&mut self.selection);
                    print_report(&report);
                }
                "8" => {
                    println!("Goodbye!");
                    break;
                }
                "b" => {
                    if self.nav.go_back().is_none() {
                        println!("No earlier directory in history");
                    }
                    self.display_directory();
                }
                "f" => {
                    if self.nav.go_forward().is_none() {
                        println!("No later directory in history");
                    }
                    self.display_directory();
                }
                "h" => {
                    self.selection.show_hidden = !self.selection.show_hidden;
                    self.config.ui.show_hidden = self.selection.show_hidden;
                    if let Err(e) = self.config.save() {
                        eprintln!("Failed to save config file: {}", e);
                    }
                    self.display_directory();
                }
                _ => println!("Invalid choice"),
            }
        }

        Ok(())
    }

    fn display_directory(&mut self) {
        let path = self.nav.current_path.clone();
        println!();
        println!("Current Directory: {}", path.display());
        println!("{}", "-".repeat(50));

        for (index, entry) in self.selection.load(&path).iter().enumerate() {
            let size = if entry.is_dir {
                String::new()
            } else {
                ByteSize(entry.size).to_string()
            };
            let modified = DateTime::<Local>::from(entry.modified);
            println!(
                "{:>3}. [{:<6}] {:<32} {:>10}  {}",
                index,
                entry.kind_label(),
                entry.display_name(),
                size,
                modified.format("%Y-%m-%d %H:%M")
            );
        }
    }

    fn navigate(&mut self) -> io::Result<()> {
        let Some(input) = read_line("Enter navigation index: ")? else {
            return Ok(());
        };
        let index: usize = match input.trim().parse() {
            Ok(i) => i,
            Err(_) => {
                println!("Navigation error: invalid index '{}'", input.trim());
                return Ok(());
            }
        };

        let path = self.nav.current_path.clone();
        let listing = self.selection.load(&path).to_vec();
        match self.nav.navigate(index, &listing) {
            Ok(_) => self.display_directory(),
            Err(e) => println!("Navigation error: {}", e),
        }
        Ok(())
    }

    fn select_files(&mut self) -> io::Result<()> {
        self.display_directory();
        let Some(indices) = read_line("Enter file indices to select (comma-separated): ")? else {
            return Ok(());
        };

        let base = self.nav.current_path.clone();
        match self.selection.select(&indices, &base) {
            Ok(selected) => {
                println!("Selected files:");
                for path in selected {
                    if let Some(name) = path.file_name() {
                        println!(" - {}", name.to_string_lossy());
                    }
                }
            }
            Err(e) => println!("Invalid input: {}", e),
        }
        Ok(())
    }
}

fn print_report(report: &BatchReport) {
    println!("{}", report.summary());
}

/// Prompts on stdout and reads one trimmed line; `None` means EOF.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut buffer = String::new();
    let bytes_read = io::stdin().lock().read_line(&mut buffer)?;
    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}
