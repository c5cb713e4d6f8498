//! Console front end: a non-interactive demonstration run over a CSV data
//! file, printing the registry and each derived view, then appending one
//! record and saving.

pub mod report;

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::config::Config;
use crate::domain::Certificate;
use crate::errors::Result;
use crate::registry::CertificateRegistry;
use crate::storage::{load_registry_from_path, save_registry_to_path};

const CONFIG_FILE: &str = "stipend.json";

/// Runs the demonstration flow. The first argument, when given, overrides
/// the configured data file path.
pub fn run<I>(args: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let config = Config::load_or_default(Path::new(CONFIG_FILE))?;
    let data_file = args
        .into_iter()
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_file.clone());

    let mut registry = load_registry_from_path(&data_file)?;

    print_section("Исходные данные");
    print!("{}", report::render_table(&registry));
    println!("Представление коллекции: {registry}");

    print_section("Первые записи");
    for certificate in registry.iter().take(3) {
        println!("  {}", certificate.summary());
    }

    print_section("Сортировка по ФИО студента");
    print!("{}", report::render_table(registry.sorted_by_student()));

    print_section("Сортировка по размеру стипендии");
    print!("{}", report::render_table(registry.sorted_by_amount()));

    print_section(&format!("Стипендии больше {}", config.min_amount));
    print!(
        "{}",
        report::render_table(registry.filter_by_amount(config.min_amount))
    );

    print_section(&format!("Высокие стипендии (больше {})", config.bonus_threshold));
    for bonus in registry.bonus_certificates(config.bonus_threshold) {
        println!(
            "{} - общая сумма: {}",
            bonus.summary(),
            Certificate::format_amount(bonus.total_amount())
        );
    }

    print_section("Статические проверки");
    println!(
        "Проверка даты '2024-01-15': {}",
        Certificate::is_valid_date("2024-01-15")
    );
    println!(
        "Форматирование суммы 1500.5: {}",
        Certificate::format_amount(1500.5)
    );

    print_section("Добавление новой справки");
    let next_number = registry.max_number().unwrap_or(0) + 1;
    let appended = Certificate::new(
        next_number,
        "2024-01-15",
        "Новый Студент Студентович",
        2500.0,
        "Новое место",
    );
    println!("Добавлена запись: {}", appended.summary());
    registry.add(appended);

    save_registry_to_path(&registry, &data_file)?;
    println!("Данные сохранены в файл {}", data_file.display());

    Ok(())
}

fn print_section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}
