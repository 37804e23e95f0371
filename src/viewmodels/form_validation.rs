// ============================================================================
// FORM VALIDATION - Reglas de los formularios de login y registro
// ============================================================================
// Funciones puras: formulario crudo (strings del DOM) → payload tipado o
// errores por campo. Los mensajes son los que ve el usuario (pt-BR).
// ============================================================================

use std::collections::BTreeMap;

use crate::models::{
    RegisterClientData, RegisterDistributionPointData, RegisterDriverData, RegisterProductData,
    ResolvedAddress,
};

/// Errores por campo ("nome", "motorista.endereco", ...)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        // Primer error gana, como en el formulario original
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn required(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, "O email é obrigatório");
    } else if !is_valid_email(value) {
        errors.insert(field, "Email inválido");
    }
}

/// Campo numérico: vacío → `required_msg`, no numérico → `type_msg`
fn number<T: std::str::FromStr>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    type_msg: &str,
    required_msg: &str,
) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, required_msg);
        return None;
    }
    // Acepta coma decimal (teclado pt-BR)
    match value.replace(',', ".").parse::<T>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.insert(field, type_msg);
            None
        }
    }
}

/// Decimal finito y mayor que cero ("NaN" e "inf" parsean como f64)
fn positive(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<f64>,
    type_msg: &str,
    positive_msg: &str,
) -> Option<f64> {
    match value {
        Some(n) if !n.is_finite() => {
            errors.insert(field, type_msg);
            None
        }
        Some(n) if n <= 0.0 => {
            errors.insert(field, positive_msg);
            None
        }
        other => other,
    }
}

/// Regla de dirección compartida por motorista y punto de distribución:
/// hace falta calle, barrio y número.
pub fn validate_address(address: &ResolvedAddress) -> Result<(String, String, u32), String> {
    let street = address.street.as_deref().filter(|s| !s.is_empty());
    let neighborhood = address.neighborhood.as_deref().filter(|s| !s.is_empty());
    let number = address.street_number.filter(|n| *n != 0);

    match (street, neighborhood, number) {
        (Some(street), Some(neighborhood), Some(number)) => {
            Ok((street.to_string(), neighborhood.to_string(), number))
        }
        (None, None, None) => Err("Endereço é obrigatório".to_string()),
        (street, neighborhood, number) => {
            let mut missing = Vec::new();
            if street.is_none() {
                missing.push("rua");
            }
            if neighborhood.is_none() {
                missing.push("bairro");
            }
            if number.is_none() {
                missing.push("número");
            }
            Err(format!("O endereço deve conter {}", missing.join(", ")))
        }
    }
}

// ============================================================================
// LOGIN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub fn validate_login(form: &LoginForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    email(&mut errors, "email", &form.email);
    required(&mut errors, "password", &form.password, "A senha é obrigatória");
    errors.into_result(|| ())
}

// ============================================================================
// CLIENTE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientForm {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub endereco: String,
    pub password: String,
}

pub fn validate_client(form: &ClientForm) -> Result<RegisterClientData, FieldErrors> {
    let mut errors = FieldErrors::new();
    required(&mut errors, "nome", &form.nome, "O nome é obrigatório");
    email(&mut errors, "email", &form.email);
    required(&mut errors, "telefone", &form.telefone, "O telefone é obrigatório");
    required(&mut errors, "endereco", &form.endereco, "O endereço é obrigatório");
    required(&mut errors, "password", &form.password, "A senha é obrigatória");

    errors.into_result(|| RegisterClientData {
        nome: form.nome.trim().to_string(),
        email: form.email.trim().to_string(),
        telefone: form.telefone.trim().to_string(),
        endereco: form.endereco.trim().to_string(),
        password: form.password.clone(),
    })
}

// ============================================================================
// VEHÍCULO + MOTORISTA
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DriverForm {
    pub nome: String,
    pub habilitacao: String,
    pub email: String,
    pub senha: String,
    pub address: ResolvedAddress,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VehicleForm {
    pub modelo: String,
    pub placa: String,
    pub capacidade: String,
    pub motorista: DriverForm,
}

/// Vehículo validado: el motorista se registra primero y su id completa el vehículo
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSubmission {
    pub driver: RegisterDriverData,
    pub modelo: String,
    pub placa: String,
    pub capacidade: f64,
}

pub fn validate_vehicle(form: &VehicleForm) -> Result<VehicleSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();
    required(&mut errors, "modelo", &form.modelo, "O modelo é obrigatório");
    required(&mut errors, "placa", &form.placa, "A placa é obrigatória");
    let capacidade = number::<f64>(
        &mut errors,
        "capacidade",
        &form.capacidade,
        "A capacidade deve ser um número",
        "A capacidade é obrigatória",
    );
    let capacidade = positive(
        &mut errors,
        "capacidade",
        capacidade,
        "A capacidade deve ser um número",
        "A capacidade deve ser maior que zero",
    );

    let driver = &form.motorista;
    required(&mut errors, "motorista.nome", &driver.nome, "O nome é obrigatório");
    required(
        &mut errors,
        "motorista.habilitacao",
        &driver.habilitacao,
        "A habilitação é obrigatória",
    );
    email(&mut errors, "motorista.email", &driver.email);
    required(&mut errors, "motorista.senha", &driver.senha, "A senha é obrigatória");
    let address = validate_address(&driver.address)
        .map_err(|msg| errors.insert("motorista.endereco", msg))
        .ok();

    match (capacidade, address) {
        (Some(capacidade), Some((end_rua, end_bairro, end_numero))) if errors.is_empty() => {
            Ok(VehicleSubmission {
                driver: RegisterDriverData {
                    nome: driver.nome.trim().to_string(),
                    habilitacao: driver.habilitacao.trim().to_string(),
                    email: driver.email.trim().to_string(),
                    senha: driver.senha.clone(),
                    end_rua,
                    end_bairro,
                    end_numero,
                },
                modelo: form.modelo.trim().to_string(),
                placa: form.placa.trim().to_uppercase(),
                capacidade,
            })
        }
        _ => Err(errors),
    }
}

// ============================================================================
// PRODUCTO (+ punto de distribución opcional)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistributionPointForm {
    pub nome: String,
    pub tipo: String,
    pub address: ResolvedAddress,
}

/// Punto de distribución del producto: uno existente o uno nuevo a registrar antes
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionPointChoice {
    Existing(String),
    New(DistributionPointForm),
}

impl Default for DistributionPointChoice {
    fn default() -> Self {
        DistributionPointChoice::Existing(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub nome: String,
    pub descricao: String,
    pub preco: String,
    pub quantidade_estoque: String,
    pub fk_id_cliente: String,
    pub ponto: DistributionPointChoice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSubmission {
    /// `fk_id_ponto_distribuicao` queda en 0 si hay que registrar `new_point` primero
    pub product: RegisterProductData,
    pub new_point: Option<RegisterDistributionPointData>,
}

pub fn validate_product(form: &ProductForm) -> Result<ProductSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();
    required(&mut errors, "nome", &form.nome, "O nome do produto é obrigatório");
    required(&mut errors, "descricao", &form.descricao, "A descrição é obrigatória");
    let preco = number::<f64>(
        &mut errors,
        "preco",
        &form.preco,
        "O preço deve ser um número",
        "O preço é obrigatório",
    );
    let preco = positive(
        &mut errors,
        "preco",
        preco,
        "O preço deve ser um número",
        "O preço deve ser maior que zero",
    );
    let quantidade = number::<i64>(
        &mut errors,
        "quantidade_estoque",
        &form.quantidade_estoque,
        "A quantidade em estoque deve ser um número",
        "A quantidade em estoque é obrigatória",
    )
    .filter(|n| {
        let valid = *n >= 0;
        if !valid {
            errors.insert("quantidade_estoque", "A quantidade em estoque não pode ser negativa");
        }
        valid
    });
    let cliente = number::<i64>(
        &mut errors,
        "fk_id_cliente",
        &form.fk_id_cliente,
        "Selecione um cliente",
        "O cliente é obrigatório",
    );

    let (point_id, new_point) = match &form.ponto {
        DistributionPointChoice::Existing(id) => {
            let id = number::<i64>(
                &mut errors,
                "fk_id_ponto_distribuicao",
                id,
                "Selecione um ponto de distribuição",
                "Selecione um ponto de distribuição",
            );
            (id, None)
        }
        DistributionPointChoice::New(point) => {
            required(
                &mut errors,
                "novoPontoDistribuicao.nome",
                &point.nome,
                "O nome do ponto é obrigatório",
            );
            required(&mut errors, "novoPontoDistribuicao.tipo", &point.tipo, "O tipo é obrigatório");
            let data = validate_address(&point.address)
                .map_err(|msg| errors.insert("novoPontoDistribuicao.endereco", msg))
                .ok()
                .map(|(end_rua, end_bairro, end_numero)| RegisterDistributionPointData {
                    nome: point.nome.trim().to_string(),
                    tipo: point.tipo.trim().to_string(),
                    end_rua,
                    end_bairro,
                    end_numero,
                });
            (Some(0), data)
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    match (preco, quantidade, cliente, point_id) {
        (Some(preco), Some(quantidade_estoque), Some(fk_id_cliente), Some(fk_id_ponto_distribuicao)) => {
            Ok(ProductSubmission {
                product: RegisterProductData {
                    nome: form.nome.trim().to_string(),
                    descricao: form.descricao.trim().to_string(),
                    preco,
                    quantidade_estoque,
                    fk_id_cliente,
                    fk_id_ponto_distribuicao,
                },
                new_point,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_address() -> ResolvedAddress {
        ResolvedAddress {
            street: Some("Rua A".to_string()),
            neighborhood: Some("Centro".to_string()),
            street_number: Some(42),
        }
    }

    fn vehicle_form() -> VehicleForm {
        VehicleForm {
            modelo: "Volvo FH".to_string(),
            placa: "abc1d23".to_string(),
            capacidade: "12,5".to_string(),
            motorista: DriverForm {
                nome: "João".to_string(),
                habilitacao: "12345678900".to_string(),
                email: "joao@entregas.com".to_string(),
                senha: "segredo".to_string(),
                address: full_address(),
            },
        }
    }

    fn product_form() -> ProductForm {
        ProductForm {
            nome: "Cimento".to_string(),
            descricao: "Saco 50kg".to_string(),
            preco: "39.90".to_string(),
            quantidade_estoque: "100".to_string(),
            fk_id_cliente: "3".to_string(),
            ponto: DistributionPointChoice::Existing("7".to_string()),
        }
    }

    #[test]
    fn address_with_nothing_is_required() {
        assert_eq!(
            validate_address(&ResolvedAddress::default()),
            Err("Endereço é obrigatório".to_string())
        );
    }

    #[test]
    fn address_lists_missing_parts_in_order() {
        let address = ResolvedAddress {
            street: Some("Rua A".to_string()),
            neighborhood: None,
            street_number: None,
        };
        assert_eq!(
            validate_address(&address),
            Err("O endereço deve conter bairro, número".to_string())
        );

        let address = ResolvedAddress {
            street_number: Some(0),
            ..full_address()
        };
        assert_eq!(validate_address(&address), Err("O endereço deve conter número".to_string()));
    }

    #[test]
    fn complete_address_passes() {
        assert_eq!(
            validate_address(&full_address()),
            Ok(("Rua A".to_string(), "Centro".to_string(), 42))
        );
    }

    #[test]
    fn login_requires_valid_email_and_password() {
        let errors = validate_login(&LoginForm {
            email: "not-an-email".to_string(),
            password: String::new(),
        })
        .unwrap_err();

        assert_eq!(errors.get("email"), Some("Email inválido"));
        assert_eq!(errors.get("password"), Some("A senha é obrigatória"));

        let errors = validate_login(&LoginForm::default()).unwrap_err();
        assert_eq!(errors.get("email"), Some("O email é obrigatório"));

        assert!(validate_login(&LoginForm {
            email: "adm@entregas.com".to_string(),
            password: "123".to_string(),
        })
        .is_ok());
    }

    #[test]
    fn client_reports_every_missing_field() {
        let errors = validate_client(&ClientForm::default()).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("nome"), Some("O nome é obrigatório"));
        assert_eq!(errors.get("telefone"), Some("O telefone é obrigatório"));
        assert_eq!(errors.get("endereco"), Some("O endereço é obrigatório"));
    }

    #[test]
    fn client_payload_is_trimmed() {
        let data = validate_client(&ClientForm {
            nome: " Maria ".to_string(),
            email: "maria@cliente.com ".to_string(),
            telefone: "(19) 99999-0000".to_string(),
            endereco: "Rua B, 10".to_string(),
            password: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(data.nome, "Maria");
        assert_eq!(data.email, "maria@cliente.com");
    }

    #[test]
    fn vehicle_builds_driver_and_vehicle_payloads() {
        let submission = validate_vehicle(&vehicle_form()).unwrap();
        assert_eq!(submission.capacidade, 12.5);
        assert_eq!(submission.placa, "ABC1D23");
        assert_eq!(submission.driver.end_rua, "Rua A");
        assert_eq!(submission.driver.end_numero, 42);
    }

    #[test]
    fn vehicle_capacity_must_be_numeric() {
        let mut form = vehicle_form();
        form.capacidade = "muito".to_string();
        let errors = validate_vehicle(&form).unwrap_err();
        assert_eq!(errors.get("capacidade"), Some("A capacidade deve ser um número"));

        form.capacidade = String::new();
        let errors = validate_vehicle(&form).unwrap_err();
        assert_eq!(errors.get("capacidade"), Some("A capacidade é obrigatória"));
    }

    #[test]
    fn vehicle_capacity_must_be_finite_and_positive() {
        let mut form = vehicle_form();
        for (input, message) in [
            ("0", "A capacidade deve ser maior que zero"),
            ("-2", "A capacidade deve ser maior que zero"),
            ("NaN", "A capacidade deve ser um número"),
            ("inf", "A capacidade deve ser um número"),
        ] {
            form.capacidade = input.to_string();
            let errors = validate_vehicle(&form).unwrap_err();
            assert_eq!(errors.get("capacidade"), Some(message), "capacidade {:?}", input);
        }
    }

    #[test]
    fn vehicle_driver_address_error_lands_on_virtual_field() {
        let mut form = vehicle_form();
        form.motorista.address.neighborhood = None;
        let errors = validate_vehicle(&form).unwrap_err();
        assert_eq!(errors.get("motorista.endereco"), Some("O endereço deve conter bairro"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn product_with_existing_point() {
        let submission = validate_product(&product_form()).unwrap();
        assert_eq!(submission.product.fk_id_ponto_distribuicao, 7);
        assert_eq!(submission.product.fk_id_cliente, 3);
        assert_eq!(submission.new_point, None);
    }

    #[test]
    fn product_without_client_asks_to_select_one() {
        let mut form = product_form();
        form.fk_id_cliente = "teste".to_string();
        let errors = validate_product(&form).unwrap_err();
        assert_eq!(errors.get("fk_id_cliente"), Some("Selecione um cliente"));
    }

    #[test]
    fn product_with_new_point_validates_point_fields() {
        let mut form = product_form();
        form.ponto = DistributionPointChoice::New(DistributionPointForm::default());
        let errors = validate_product(&form).unwrap_err();
        assert_eq!(errors.get("novoPontoDistribuicao.nome"), Some("O nome do ponto é obrigatório"));
        assert_eq!(errors.get("novoPontoDistribuicao.tipo"), Some("O tipo é obrigatório"));
        assert_eq!(errors.get("novoPontoDistribuicao.endereco"), Some("Endereço é obrigatório"));

        form.ponto = DistributionPointChoice::New(DistributionPointForm {
            nome: "CD Campinas".to_string(),
            tipo: "Armazém".to_string(),
            address: full_address(),
        });
        let submission = validate_product(&form).unwrap();
        let point = submission.new_point.unwrap();
        assert_eq!(point.nome, "CD Campinas");
        assert_eq!(point.end_numero, 42);
    }

    #[test]
    fn product_numbers_reject_text() {
        let mut form = product_form();
        form.preco = "caro".to_string();
        form.quantidade_estoque = "1.5".to_string();
        let errors = validate_product(&form).unwrap_err();
        assert_eq!(errors.get("preco"), Some("O preço deve ser um número"));
        assert_eq!(
            errors.get("quantidade_estoque"),
            Some("A quantidade em estoque deve ser um número")
        );
    }

    #[test]
    fn product_price_must_be_finite_and_positive() {
        let mut form = product_form();
        for (input, message) in [
            ("0", "O preço deve ser maior que zero"),
            ("-5", "O preço deve ser maior que zero"),
            ("NaN", "O preço deve ser um número"),
            ("inf", "O preço deve ser um número"),
        ] {
            form.preco = input.to_string();
            let errors = validate_product(&form).unwrap_err();
            assert_eq!(errors.get("preco"), Some(message), "preco {:?}", input);
        }
    }

    #[test]
    fn product_stock_cannot_be_negative() {
        let mut form = product_form();
        form.quantidade_estoque = "-3".to_string();
        let errors = validate_product(&form).unwrap_err();
        assert_eq!(
            errors.get("quantidade_estoque"),
            Some("A quantidade em estoque não pode ser negativa")
        );

        form.quantidade_estoque = "0".to_string();
        assert_eq!(validate_product(&form).unwrap().product.quantidade_estoque, 0);
    }
}
