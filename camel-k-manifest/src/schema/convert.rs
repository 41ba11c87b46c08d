//! Derive data source attributes from the JSON schema of a Rust type.
use super::{Attribute, AttributeType, Attributes, Validator};
use schemars::gen::SchemaSettings;
use schemars::schema::{InstanceType, ObjectValidation, Schema, SchemaObject, SingleOrVec};
use schemars::JsonSchema;
use serde_json::Value;
use tracing::{trace, warn};

const INT_OR_STRING: &str = "x-kubernetes-int-or-string";
const PRESERVE_UNKNOWN_FIELDS: &str = "x-kubernetes-preserve-unknown-fields";

/// The attributes of the object `T` serializes to.
pub fn attributes_for<T: JsonSchema>() -> Attributes {
    let root = SchemaSettings::draft07()
        .with(|s| {
            s.option_nullable = false;
            s.option_add_null_type = false;
        })
        .into_generator()
        .into_root_schema_for::<T>();

    let mut converter = Converter {
        definitions: &root.definitions,
        stack: vec![T::schema_name()],
    };
    match converter.convert_object(&root.schema).type_ {
        AttributeType::Object(attributes) => attributes,
        other => {
            warn!(schema = %T::schema_name(), ?other, "schema root is not an object");
            Attributes::new()
        }
    }
}

/// The snake_case attribute name for a property name.
///
/// Acronyms are kept together (`requestCPU` becomes `request_cpu`) and a
/// leading digit is spelled out (`3scale` becomes `three_scale`).
pub fn attribute_name(wire: &str) -> String {
    const DIGITS: [&str; 10] = ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

    let chars: Vec<char> = wire.chars().collect();
    let mut name = String::with_capacity(wire.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i == 0 {
            if let Some(digit) = c.to_digit(10) {
                name.push_str(DIGITS[digit as usize]);
                name.push('_');
                continue;
            }
        }
        match c {
            'A'..='Z' => {
                let boundary = match i.checked_sub(1).map(|p| chars[p]) {
                    Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                    Some(p) if p.is_ascii_uppercase() => {
                        chars.get(i + 1).map_or(false, char::is_ascii_lowercase)
                    }
                    _ => false,
                };
                if boundary && !name.ends_with('_') {
                    name.push('_');
                }
                name.push(c.to_ascii_lowercase());
            }
            '-' | '.' | '/' => name.push('_'),
            _ => name.push(c),
        }
    }
    name
}

struct Converted {
    type_: AttributeType,
    description: Option<String>,
    validators: Vec<Validator>,
}

impl Converted {
    fn new(type_: AttributeType) -> Self {
        Converted {
            type_,
            description: None,
            validators: Vec::new(),
        }
    }

    fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    fn into_attribute(self, wire: &str, name: &str, required: bool) -> Attribute {
        Attribute {
            type_: self.type_,
            description: self.description,
            wire_name: (name != wire).then(|| wire.to_string()),
            required,
            optional: !required,
            computed: false,
            validators: self.validators,
        }
    }
}

struct Converter<'a> {
    definitions: &'a schemars::Map<String, Schema>,
    /// Definitions currently being expanded, to cut recursive types.
    stack: Vec<String>,
}

impl<'a> Converter<'a> {
    fn convert(&mut self, schema: &Schema) -> Converted {
        match schema {
            Schema::Bool(_) => Converted::new(AttributeType::Dynamic),
            Schema::Object(object) => self.convert_object(object),
        }
    }

    fn convert_object(&mut self, object: &SchemaObject) -> Converted {
        let description = object.metadata.as_ref().and_then(|m| m.description.clone());
        let mut converted = self.convert_type(object);
        if description.is_some() {
            converted.description = description;
        }
        converted
    }

    fn convert_type(&mut self, object: &SchemaObject) -> Converted {
        if let Some(reference) = &object.reference {
            return self.convert_reference(reference);
        }
        if object.extensions.contains_key(INT_OR_STRING) {
            return Converted::new(AttributeType::IntOrString);
        }
        if object.extensions.get(PRESERVE_UNKNOWN_FIELDS) == Some(&Value::Bool(true)) {
            return Converted::new(AttributeType::Dynamic);
        }
        if let Some(values) = &object.enum_values {
            return string_enum(values.iter());
        }
        if let Some(subschemas) = &object.subschemas {
            if let Some([single]) = subschemas.all_of.as_deref() {
                return self.convert(single);
            }
            if let Some(variants) = subschemas.one_of.as_ref().or(subschemas.any_of.as_ref()) {
                return self.convert_union(variants);
            }
        }

        let type_ = match object.instance_type.as_ref().and_then(primary_type) {
            Some(InstanceType::String) => AttributeType::String,
            Some(InstanceType::Boolean) => AttributeType::Bool,
            Some(InstanceType::Integer) => {
                let converted = Converted::new(AttributeType::Int64);
                return match object.format.as_deref().and_then(integer_range) {
                    Some((min, max)) => converted.with_validator(Validator::IntRange { min, max }),
                    None => converted,
                };
            }
            Some(InstanceType::Number) => AttributeType::Float64,
            Some(InstanceType::Array) => {
                let element = match object.array.as_ref().and_then(|a| a.items.as_ref()) {
                    Some(SingleOrVec::Single(item)) => self.convert(item).type_,
                    _ => AttributeType::Dynamic,
                };
                AttributeType::List(Box::new(element))
            }
            Some(InstanceType::Object) => return self.convert_properties(object.object.as_deref()),
            Some(InstanceType::Null) | None => AttributeType::Dynamic,
        };
        Converted::new(type_)
    }

    fn convert_reference(&mut self, reference: &str) -> Converted {
        let name = reference.trim_start_matches("#/definitions/");
        if self.stack.iter().any(|n| n == name) {
            trace!(definition = name, "recursive definition kept as dynamic");
            return Converted::new(AttributeType::Dynamic);
        }
        let target = match self.definitions.get(name) {
            Some(target) => target,
            None => {
                warn!(reference, "unresolved schema reference");
                return Converted::new(AttributeType::Dynamic);
            }
        };
        self.stack.push(name.to_string());
        let converted = self.convert(target);
        self.stack.pop();
        converted
    }

    fn convert_properties(&mut self, validation: Option<&ObjectValidation>) -> Converted {
        let validation = match validation {
            Some(validation) => validation,
            None => return Converted::new(AttributeType::Object(Attributes::new())),
        };

        if validation.properties.is_empty() {
            return match validation.additional_properties.as_deref() {
                Some(Schema::Bool(false)) | None => Converted::new(AttributeType::Object(Attributes::new())),
                Some(additional) => {
                    let element = self.convert(additional).type_;
                    Converted::new(AttributeType::Map(Box::new(element)))
                }
            };
        }

        let mut attributes = Attributes::new();
        for (wire, schema) in &validation.properties {
            let name = attribute_name(wire);
            if attributes.contains_key(&name) {
                warn!(property = %wire, attribute = %name, "attribute name collision, property skipped");
                continue;
            }
            let attribute = self
                .convert(schema)
                .into_attribute(wire, &name, validation.required.contains(wire));
            attributes.insert(name, attribute);
        }
        Converted::new(AttributeType::Object(attributes))
    }

    /// Unit enums become strings; externally tagged enums become an object
    /// holding one optional attribute per variant.
    fn convert_union(&mut self, variants: &[Schema]) -> Converted {
        let mut values = Vec::new();
        let mut attributes = Attributes::new();
        for variant in variants {
            let object = match variant {
                Schema::Object(object) => object,
                Schema::Bool(_) => return Converted::new(AttributeType::Dynamic),
            };
            if let Some(enum_values) = &object.enum_values {
                values.extend(enum_values.iter().cloned());
                continue;
            }
            let tagged = object
                .object
                .as_ref()
                .filter(|o| o.properties.len() == 1)
                .and_then(|o| o.properties.iter().next());
            match tagged {
                Some((wire, schema)) => {
                    let mut converted = self.convert(schema);
                    if converted.description.is_none() {
                        converted.description = object.metadata.as_ref().and_then(|m| m.description.clone());
                    }
                    let name = attribute_name(wire);
                    let attribute = converted.into_attribute(wire, &name, false);
                    attributes.insert(name, attribute);
                }
                None => return Converted::new(AttributeType::Dynamic),
            }
        }

        match (values.is_empty(), attributes.is_empty()) {
            (false, true) => string_enum(values.iter()),
            (true, false) => {
                let tags = attributes.keys().cloned().collect();
                Converted::new(AttributeType::Object(attributes)).with_validator(Validator::ExactlyOneOf(tags))
            }
            _ => Converted::new(AttributeType::Dynamic),
        }
    }
}

fn primary_type(types: &SingleOrVec<InstanceType>) -> Option<InstanceType> {
    match types {
        SingleOrVec::Single(t) => Some((**t).clone()),
        SingleOrVec::Vec(ts) => ts.iter().find(|t| **t != InstanceType::Null).cloned(),
    }
}

/// Bounds of an integer format narrower than `int64`.
fn integer_range(format: &str) -> Option<(i64, i64)> {
    let range: (i64, i64) = match format {
        "int8" => (i8::MIN.into(), i8::MAX.into()),
        "int16" => (i16::MIN.into(), i16::MAX.into()),
        "int32" => (i32::MIN.into(), i32::MAX.into()),
        "uint8" => (0, u8::MAX.into()),
        "uint16" => (0, u16::MAX.into()),
        "uint32" => (0, u32::MAX.into()),
        "uint" | "uint64" => (0, i64::MAX),
        _ => return None,
    };
    Some(range)
}

fn string_enum<'v>(values: impl Iterator<Item = &'v Value>) -> Converted {
    let strings: Option<Vec<String>> = values.map(|v| v.as_str().map(String::from)).collect();
    match strings {
        Some(strings) => Converted::new(AttributeType::String).with_validator(Validator::OneOf(strings)),
        None => Converted::new(AttributeType::Dynamic),
    }
}
