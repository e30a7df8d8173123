//! Biblioteca Digital console binary
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --data-dir data --out-dir output
//! ```
//!
//! Presents an interactive menu for loading pipe-delimited user, book and
//! loan files and for showing or exporting the reports. Default input formats:
//!
//! - Usuarios: `id_usuario|nombre`
//! - Libros: `id_libro|titulo`
//! - Préstamos: `id_usuario|id_libro|YYYY-MM-DD|YYYY-MM-DD` (fecha de
//!   devolución vacía si no devuelto), or the 6-field form with name and
//!   title hints.

use biblioteca_engine::cli;

fn main() {
    let args = cli::parse_args();

    println!("=== SISTEMA DE BIBLIOTECA DIGITAL (Consola) ===");
    println!("Nota: Formatos por defecto separados por '|'");
    println!("Usuarios: id_usuario|nombre   Libros: id_libro|titulo");
    println!("Préstamos: id_usuario|id_libro|YYYY-MM-DD|YYYY-MM-DD (vacío si no devuelto)");
    println!();

    cli::menu::run(&args);
}
