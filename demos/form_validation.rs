//! Form validation: every problem with a signup form, reported at once
//!
//! Run with `cargo run --example form_validation`.

use unionkit::{Semigroup, Validation};

#[derive(Debug, Clone, PartialEq)]
struct Email(String);

#[derive(Debug, Clone, PartialEq)]
struct Password(String);

#[derive(Debug, Clone, PartialEq)]
struct Age(u8);

#[derive(Debug, PartialEq)]
struct User {
    email: Email,
    password: Password,
    age: Age,
}

struct SignupForm {
    email: String,
    password: String,
    password_confirm: String,
    age: String,
}

#[derive(Debug, Clone, PartialEq)]
enum SignupError {
    InvalidEmail { value: String, reason: &'static str },
    PasswordTooShort { min_length: usize },
    PasswordMismatch,
    InvalidAge { value: String },
    AgeTooYoung { age: u8, minimum: u8 },
}

/// Errors grouped for display; kept in the order they were found
#[derive(Debug, Default, PartialEq)]
struct SignupErrors(Vec<SignupError>);

impl Semigroup for SignupErrors {
    fn concat(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl From<SignupError> for SignupErrors {
    fn from(error: SignupError) -> Self {
        SignupErrors(vec![error])
    }
}

type Checked<T> = Validation<T, SignupErrors>;

fn fail<T>(error: SignupError) -> Checked<T> {
    Validation::failure(error.into())
}

fn validate_email(email: &str) -> Checked<Email> {
    if email.is_empty() {
        return fail(SignupError::InvalidEmail {
            value: email.to_string(),
            reason: "Email cannot be empty",
        });
    }
    if !email.contains('@') || !email.contains('.') {
        return fail(SignupError::InvalidEmail {
            value: email.to_string(),
            reason: "Must contain @ and .",
        });
    }
    Validation::success(Email(email.to_string()))
}

fn validate_password(pwd: &str) -> Checked<Password> {
    if pwd.len() < 8 {
        fail(SignupError::PasswordTooShort { min_length: 8 })
    } else {
        Validation::success(Password(pwd.to_string()))
    }
}

fn validate_passwords_match(pwd: &str, confirm: &str) -> Checked<()> {
    if pwd == confirm {
        Validation::success(())
    } else {
        fail(SignupError::PasswordMismatch)
    }
}

fn validate_age(input: &str) -> Checked<Age> {
    // parsing has to succeed before the range can be checked
    Validation::from_result(input.parse::<u8>())
        .map_failure(|_| {
            SignupErrors::from(SignupError::InvalidAge {
                value: input.to_string(),
            })
        })
        .and_then(|age| {
            if age < 18 {
                fail(SignupError::AgeTooYoung { age, minimum: 18 })
            } else {
                Validation::success(Age(age))
            }
        })
}

/// Applicative style: lift a curried constructor and apply it field by field.
fn validate_signup_form(form: &SignupForm) -> Checked<User> {
    let user = |email| move |password| move |age| move |()| User { email, password, age };

    Validation::of(user)
        .apply(validate_email(&form.email))
        .apply(validate_password(&form.password))
        .apply(validate_age(&form.age))
        .apply(validate_passwords_match(&form.password, &form.password_confirm))
}

/// Pairwise style with `and`, which reads better for a handful of fields.
fn validate_signup_form_pairwise(form: &SignupForm) -> Checked<User> {
    validate_email(&form.email)
        .and(validate_password(&form.password))
        .and(validate_age(&form.age))
        .and(validate_passwords_match(&form.password, &form.password_confirm))
        .map(|(((email, password), age), ())| User { email, password, age })
}

fn report(label: &str, result: Checked<User>) {
    println!("{label}");
    result.fold(
        |SignupErrors(errors)| {
            println!("  {} problem(s):", errors.len());
            for (i, err) in errors.iter().enumerate() {
                println!("    {}. {:?}", i + 1, err);
            }
        },
        |user| println!("  created {user:?}"),
    );
    println!();
}

fn main() {
    tracing_subscriber::fmt::init();

    let valid = SignupForm {
        email: "user@example.com".to_string(),
        password: "secure123".to_string(),
        password_confirm: "secure123".to_string(),
        age: "25".to_string(),
    };
    report("Valid form:", validate_signup_form(&valid));

    let invalid = SignupForm {
        email: "not-an-email".to_string(),
        password: "weak".to_string(),
        password_confirm: "different".to_string(),
        age: "15".to_string(),
    };
    report("Every field wrong:", validate_signup_form(&invalid));

    let unparsable = SignupForm {
        email: "valid@example.com".to_string(),
        password: "short".to_string(),
        password_confirm: "short".to_string(),
        age: "twenty".to_string(),
    };
    report("Pairwise, two problems:", validate_signup_form_pairwise(&unparsable));

    // both composition styles agree
    assert_eq!(
        validate_signup_form(&invalid),
        validate_signup_form_pairwise(&invalid)
    );
}
