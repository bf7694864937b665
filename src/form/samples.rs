//! The registration forms of the front-end, and the sample data sets it offers to fill them.

use crate::form::rule::FieldRule;
use crate::form::schema::FormSchema;
use crate::form::values::FormValues;

pub const PERSON_FORM: &str = "persona";
pub const PET_FORM: &str = "mascota";

/// Fields shared by both forms: who is responsible for the registered person or pet
fn with_tutor_fields(schema: FormSchema) -> FormSchema {
    schema
        .field(
            "tutorNombre",
            vec![FieldRule::Required, FieldRule::MinLength { min_length: 2 }],
        )
        .field("tutorRut", vec![FieldRule::Required, FieldRule::ChileanRut])
        .field("tutorTelefono", vec![FieldRule::Required])
        .field(
            "tutorDireccion",
            vec![FieldRule::Required, FieldRule::MinLength { min_length: 10 }],
        )
}

pub fn person_schema() -> FormSchema {
    with_tutor_fields(
        FormSchema::new(PERSON_FORM)
            .field(
                "nombre",
                vec![FieldRule::Required, FieldRule::MinLength { min_length: 2 }],
            )
            .field(
                "apellido",
                vec![FieldRule::Required, FieldRule::MinLength { min_length: 2 }],
            )
            .field("email", vec![FieldRule::Email])
            .field("telefono", vec![]),
    )
}

pub fn pet_schema() -> FormSchema {
    with_tutor_fields(
        FormSchema::new(PET_FORM)
            .field(
                "nombre",
                vec![FieldRule::Required, FieldRule::MinLength { min_length: 2 }],
            )
            .field("especie", vec![FieldRule::Required])
            .field(
                "raza",
                vec![FieldRule::Required, FieldRule::MinLength { min_length: 2 }],
            )
            .field("edad", vec![])
            .field("peso", vec![])
            .field("color", vec![])
            .field("observaciones", vec![]),
    )
}

struct Tutor {
    name: &'static str,
    rut: &'static str,
    phone: &'static str,
    address: &'static str,
}

const SAMPLE_TUTORS: [Tutor; 3] = [
    Tutor {
        name: "Carlos González",
        rut: "12.345.678-5",
        phone: "+56 9 8765 4321",
        address: "Av. Providencia 1234, Santiago",
    },
    Tutor {
        name: "Ana Pérez",
        rut: "20.686.957-7",
        phone: "+56 9 7654 3210",
        address: "Calle Las Condes 567, Las Condes",
    },
    Tutor {
        name: "Miguel Rodríguez",
        rut: "15.123.456-9",
        phone: "+56 9 6543 2109",
        address: "Av. Apoquindo 890, Las Condes",
    },
];

fn tutor_values(tutor: &Tutor) -> FormValues {
    FormValues::new()
        .with("tutorNombre", tutor.name)
        .with("tutorRut", tutor.rut)
        .with("tutorTelefono", tutor.phone)
        .with("tutorDireccion", tutor.address)
}

pub fn sample_person_values() -> Vec<FormValues> {
    let people = [
        ("María", "González", "maria.gonzalez@email.com", "+56 9 1234 5678"),
        ("Juan", "Pérez", "juan.perez@email.com", "+56 9 2345 6789"),
        ("Sofía", "Rodríguez", "sofia.rodriguez@email.com", "+56 9 3456 7890"),
    ];
    people
        .iter()
        .zip(&SAMPLE_TUTORS)
        .map(|((name, last_name, email, phone), tutor)| {
            tutor_values(tutor)
                .with("nombre", *name)
                .with("apellido", *last_name)
                .with("email", *email)
                .with("telefono", *phone)
        })
        .collect()
}

pub fn sample_pet_values() -> Vec<FormValues> {
    let pets = [
        (
            "Max",
            "perro",
            "Golden Retriever",
            "3",
            "25.5",
            "Dorado",
            "Muy amigable y juguetón. Le encanta jugar con pelotas.",
        ),
        (
            "Luna",
            "gato",
            "Siamés",
            "2",
            "4.2",
            "Crema con puntos negros",
            "Gata tranquila y cariñosa. Le gusta dormir en lugares altos.",
        ),
        (
            "Rocky",
            "perro",
            "Pastor Alemán",
            "5",
            "35.0",
            "Negro y marrón",
            "Perro guardián muy leal. Excelente con niños.",
        ),
    ];
    pets.iter()
        .zip(&SAMPLE_TUTORS)
        .map(|((name, species, breed, age, weight, color, notes), tutor)| {
            tutor_values(tutor)
                .with("nombre", *name)
                .with("especie", *species)
                .with("raza", *breed)
                .with("edad", *age)
                .with("peso", *weight)
                .with("color", *color)
                .with("observaciones", *notes)
        })
        .collect()
}
