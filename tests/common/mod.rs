use stipend_core::domain::Certificate;
use stipend_core::registry::CertificateRegistry;

/// Three-record registry mirroring the reference data file.
pub fn sample_registry() -> CertificateRegistry {
    let mut registry = CertificateRegistry::new();
    registry.add(Certificate::new(
        1,
        "2024-01-15",
        "Иванова Анна Сергеевна",
        1500.0,
        "в деканат",
    ));
    registry.add(Certificate::new(
        2,
        "2024-01-20",
        "Петров Пётр Петрович",
        2500.0,
        "в банк",
    ));
    registry.add(Certificate::new(
        3,
        "2024-02-01",
        "Сидорова Мария Ивановна",
        1800.0,
        "в общежитие",
    ));
    registry
}

/// Data-file text exactly as the reference tooling writes it.
pub fn reference_csv_text() -> &'static str {
    "№,дата,ФИО студента,размер стипендии,куда выдается справка\n\
     1,2024-01-15,Иванова Анна Сергеевна,1500.0,в деканат\n\
     2,2024-01-20,Петров Пётр Петрович,2500.0,в банк\n\
     3,2024-02-01,Сидорова Мария Ивановна,1800.0,в общежитие\n"
}
