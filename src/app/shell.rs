use crate::core::{import, query, Book, Catalog};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Interactive menu loop over the catalog. Generic over input/output so
/// tests can drive it with in-memory buffers instead of a terminal.
///
/// Each menu action runs one operation against the catalog and returns to
/// the menu; data errors are reported and never end the session. EOF on
/// input behaves like Exit.
pub struct Shell<R, W> {
    input: R,
    output: W,
    catalog: Catalog,
}

enum MenuChoice {
    AddBook,
    SearchGenre,
    Recommend,
    Import,
    Exit,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, catalog: Catalog) -> Self {
        Self {
            input,
            output,
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => break, // EOF, same as Exit
            };

            match Self::parse_choice(&line) {
                Some(MenuChoice::AddBook) => self.add_book()?,
                Some(MenuChoice::SearchGenre) => self.search_genre()?,
                Some(MenuChoice::Recommend) => self.recommend()?,
                Some(MenuChoice::Import) => self.import_csv()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                None => {
                    writeln!(self.output, "❌ Invalid option. Please try again.")?;
                }
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "1. Add book")?;
        writeln!(self.output, "2. Search books by genre")?;
        writeln!(self.output, "3. Recommend a book")?;
        writeln!(self.output, "4. Import books from CSV")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Select an option (1-5): ")?;
        self.output.flush()?;
        Ok(())
    }

    fn parse_choice(line: &str) -> Option<MenuChoice> {
        match line.trim() {
            "1" => Some(MenuChoice::AddBook),
            "2" => Some(MenuChoice::SearchGenre),
            "3" => Some(MenuChoice::Recommend),
            "4" => Some(MenuChoice::Import),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    fn add_book(&mut self) -> Result<()> {
        let title = match self.prompt("Enter the book title: ")? {
            Some(value) => value,
            None => return Ok(()),
        };
        let author = match self.prompt("Enter the author: ")? {
            Some(value) => value,
            None => return Ok(()),
        };
        let genre = match self.prompt("Enter the genre: ")? {
            Some(value) => value,
            None => return Ok(()),
        };
        let raw_rating = match self.prompt("Enter the rating (0-5): ")? {
            Some(value) => value,
            None => return Ok(()),
        };

        let rating = match raw_rating.trim().parse::<f64>() {
            Ok(rating) => rating,
            Err(err) => {
                writeln!(self.output, "❌ Invalid rating '{}': {}", raw_rating, err)?;
                return Ok(());
            }
        };

        match Book::new(title.clone(), author, genre, rating) {
            Ok(book) => {
                self.catalog.append(book);
                tracing::info!("Book added: {}", title);
                writeln!(self.output, "✅ Book '{}' added successfully.", title)?;
            }
            Err(err) => {
                writeln!(self.output, "❌ {}", err)?;
            }
        }
        Ok(())
    }

    fn search_genre(&mut self) -> Result<()> {
        let genre = match self.prompt("Enter the genre to search: ")? {
            Some(value) => value,
            None => return Ok(()),
        };

        let titles = query::titles_in_genre(&self.catalog, &genre);
        if titles.is_empty() {
            writeln!(self.output, "No books found in genre '{}'.", genre)?;
        } else {
            writeln!(self.output, "Books found in genre '{}':", genre)?;
            for title in titles {
                writeln!(self.output, "{}", title)?;
            }
        }
        Ok(())
    }

    fn recommend(&mut self) -> Result<()> {
        let genre = match self.prompt("Enter the genre for a recommendation: ")? {
            Some(value) => value,
            None => return Ok(()),
        };

        match query::recommend(&self.catalog, &genre) {
            Some(book) => writeln!(
                self.output,
                "Recommendation: '{}' by {} with a rating of {}.",
                book.title(),
                book.author(),
                book.rating()
            )?,
            None => writeln!(
                self.output,
                "No books to recommend in genre '{}'.",
                genre
            )?,
        }
        Ok(())
    }

    fn import_csv(&mut self) -> Result<()> {
        let path = match self.prompt("Enter the CSV file path: ")? {
            Some(value) => value,
            None => return Ok(()),
        };

        match import::load_csv(path.trim(), &mut self.catalog) {
            Ok(summary) => {
                writeln!(self.output, "✅ Imported {} books.", summary.added)?;
                for err in &summary.errors {
                    writeln!(self.output, "❌ {}", err)?;
                }
            }
            Err(err) => {
                writeln!(self.output, "❌ {}", err)?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// One line of input with the line ending stripped; `None` at EOF.
    /// Interior whitespace is preserved, matching the no-trim genre
    /// semantics.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_shell(input: &str) -> (Catalog, String) {
        run_shell_with(input, Catalog::new())
    }

    fn run_shell_with(input: &str, catalog: Catalog) -> (Catalog, String) {
        let mut output = Vec::new();
        let mut shell = Shell::new(Cursor::new(input.to_string()), &mut output, catalog);
        shell.run().unwrap();
        let Shell { catalog, .. } = shell;
        (catalog, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_add_then_exit() {
        let (catalog, output) = run_shell("1\nThe Hobbit\nJ.R.R. Tolkien\nFantasy\n4.8\n5\n");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].title(), "The Hobbit");
        assert!(output.contains("✅ Book 'The Hobbit' added successfully."));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_add_rejects_out_of_range_rating() {
        let (catalog, output) = run_shell("1\nBad\nNobody\nDrama\n6.5\n5\n");
        assert!(catalog.is_empty());
        assert!(output.contains("❌"));
    }

    #[test]
    fn test_invalid_menu_option_reprompts() {
        let (_, output) = run_shell("9\n5\n");
        assert!(output.contains("❌ Invalid option"));
        // menu is shown again after the bad selection
        assert_eq!(output.matches("Select an option (1-5):").count(), 2);
    }

    #[test]
    fn test_search_reports_matches_and_absence() {
        let mut catalog = Catalog::new();
        catalog.append(Book::new("Dune", "Frank Herbert", "Sci-Fi", 4.5).unwrap());

        let (_, output) = run_shell_with("2\nsci-fi\n2\nRomance\n5\n", catalog);
        assert!(output.contains("Books found in genre 'sci-fi':"));
        assert!(output.contains("Dune"));
        assert!(output.contains("No books found in genre 'Romance'."));
    }

    #[test]
    fn test_recommend_reports_best_and_absence() {
        let mut catalog = Catalog::new();
        catalog.append(Book::new("Low", "a", "Drama", 4.0).unwrap());
        catalog.append(Book::new("High", "b", "Drama", 4.8).unwrap());

        let (_, output) = run_shell_with("3\ndrama\n3\nHorror\n5\n", catalog);
        assert!(output.contains("Recommendation: 'High' by b with a rating of 4.8."));
        assert!(output.contains("No books to recommend in genre 'Horror'."));
    }

    #[test]
    fn test_import_missing_file_reports_error() {
        let (catalog, output) = run_shell("4\n/no/such/file.csv\n5\n");
        assert!(catalog.is_empty());
        assert!(output.contains("Import source not found"));
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let (catalog, _) = run_shell("");
        assert!(catalog.is_empty());
    }
}
