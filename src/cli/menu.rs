//! Interactive console menu
//!
//! Thin dispatch layer over the store and the report builders: prompts for
//! file paths (Enter accepts the per-file default under `--data-dir`), runs
//! one action per selection, and loops until `0`. A failed load prints the
//! error and returns to the menu; accumulated state is never discarded.

use crate::cli::args::CliArgs;
use crate::report::{self, Report};
use crate::store::LibraryStore;
use crate::types::LibraryError;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const HISTORY_WIDTHS: &[usize] = &[12, 20, 12, 20, 14, 16];
const USERS_WIDTHS: &[usize] = &[12, 25];
const BOOKS_WIDTHS: &[usize] = &[12, 40];
const STATISTICS_WIDTHS: &[usize] = &[24, 44];
const OVERDUE_WIDTHS: &[usize] = &[12, 20, 12, 20, 14];

const MENU: &str = "\
MENÚ PRINCIPAL
1) Cargar usuarios
2) Cargar libros
3) Cargar préstamos
4) Mostrar historial de préstamos
5) Mostrar listado de usuarios únicos
6) Mostrar listado de libros prestados
7) Mostrar estadísticas de préstamos
8) Mostrar préstamos vencidos
9) Exportar todos los reportes a HTML
E) Mostrar errores de carga/validación
0) Salir";

/// Today according to the system clock; overdue math takes it as a parameter
fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn read_trimmed_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None, // EOF: behave like quitting
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Ask for a file path; an empty answer means the default
fn prompt_path(input: &mut impl BufRead, default: &Path) -> PathBuf {
    print!("Ingrese ruta del archivo [Enter = {}]: ", default.display());
    let _ = io::stdout().flush();
    match read_trimmed_line(input) {
        Some(answer) if !answer.is_empty() => PathBuf::from(answer),
        _ => default.to_path_buf(),
    }
}

fn show(report: &Report, widths: &[usize]) {
    print!("{}", report::console::render(report, widths));
    println!();
}

fn show_errors(store: &LibraryStore) {
    if store.errors().is_empty() {
        println!("Sin errores reportados.");
        return;
    }
    println!("ERRORES DETECTADOS");
    println!("{}", "-".repeat(60));
    for error in store.errors() {
        println!("{error}");
    }
    println!();
}

/// Export the five reports as HTML pages into the output directory
fn export_all(store: &LibraryStore, out_dir: &Path) -> Result<(), LibraryError> {
    report::html::ensure_output_dir(out_dir)?;
    let pages = [
        (report::history(store), "historial_prestamos.html"),
        (report::unique_users(store), "usuarios.html"),
        (report::borrowed_books(store), "libros.html"),
        (report::statistics(store), "estadisticas.html"),
        (report::overdue(store, today()), "vencidos.html"),
    ];
    for (page, file_name) in &pages {
        report::html::export(page, &out_dir.join(file_name))?;
    }
    println!("Reportes HTML generados en: {}", out_dir.display());
    Ok(())
}

fn load(
    input: &mut impl BufRead,
    default: &Path,
    what: &str,
    mut action: impl FnMut(&Path) -> Result<(), LibraryError>,
) {
    let path = prompt_path(input, default);
    match action(&path) {
        Ok(()) => println!("{what} cargados.\n"),
        Err(e) => eprintln!("Error cargando {}: {e}\n", what.to_lowercase()),
    }
}

/// Run the menu loop until the user quits or stdin closes
pub fn run(args: &CliArgs) {
    let mut store = LibraryStore::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{MENU}");
        print!("Seleccione una opción: ");
        let _ = io::stdout().flush();
        let Some(option) = read_trimmed_line(&mut input) else {
            break;
        };
        println!();

        match option.to_lowercase().as_str() {
            "1" => load(
                &mut input,
                &args.data_dir.join("usuarios.lfa"),
                "Usuarios",
                |path| store.load_users(path),
            ),
            "2" => load(
                &mut input,
                &args.data_dir.join("libros.lfa"),
                "Libros",
                |path| store.load_books(path),
            ),
            "3" => load(
                &mut input,
                &args.data_dir.join("prestamos.lfa"),
                "Préstamos",
                |path| store.load_loans(path),
            ),
            "4" => show(&report::history(&store), HISTORY_WIDTHS),
            "5" => show(&report::unique_users(&store), USERS_WIDTHS),
            "6" => show(&report::borrowed_books(&store), BOOKS_WIDTHS),
            "7" => show(&report::statistics(&store), STATISTICS_WIDTHS),
            "8" => show(&report::overdue(&store, today()), OVERDUE_WIDTHS),
            "9" => {
                if let Err(e) = export_all(&store, &args.out_dir) {
                    eprintln!("Error exportando reportes: {e}\n");
                }
            }
            "e" => show_errors(&store),
            "0" => {
                println!("Saliendo...");
                break;
            }
            _ => println!("Opción no válida. Intente de nuevo.\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Book, Loan, User};
    use std::io::Cursor;

    #[test]
    fn test_read_trimmed_line() {
        let mut input = Cursor::new(b"  9 \n".to_vec());
        assert_eq!(read_trimmed_line(&mut input), Some("9".to_string()));
        assert_eq!(read_trimmed_line(&mut input), None);
    }

    #[test]
    fn test_prompt_path_empty_answer_uses_default() {
        let mut input = Cursor::new(b"\n".to_vec());
        let path = prompt_path(&mut input, Path::new("data/usuarios.lfa"));
        assert_eq!(path, PathBuf::from("data/usuarios.lfa"));
    }

    #[test]
    fn test_prompt_path_answer_overrides_default() {
        let mut input = Cursor::new(b" /tmp/otros.lfa \n".to_vec());
        let path = prompt_path(&mut input, Path::new("data/usuarios.lfa"));
        assert_eq!(path, PathBuf::from("/tmp/otros.lfa"));
    }

    #[test]
    fn test_export_all_writes_five_pages() {
        let mut store = LibraryStore::new();
        store.catalog.upsert_user(User::new("U1", "Ada"));
        store.catalog.upsert_book(Book::new("B1", "El Quijote"));
        store.ledger.push(Loan {
            user_id: "U1".to_string(),
            book_id: "B1".to_string(),
            loan_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            return_date: None,
            user_name_hint: String::new(),
            book_title_hint: String::new(),
        });

        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("reportes");
        export_all(&store, &out_dir).unwrap();

        for file_name in [
            "historial_prestamos.html",
            "usuarios.html",
            "libros.html",
            "estadisticas.html",
            "vencidos.html",
        ] {
            assert!(out_dir.join(file_name).is_file(), "missing {file_name}");
        }
    }
}
