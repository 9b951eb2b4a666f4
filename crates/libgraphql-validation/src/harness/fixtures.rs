//! Schemas for rule tests to validate documents against.

use crate::Schema;
use std::sync::OnceLock;

/// A schema describing pets and their owners, used by
/// [`assert_passes_rule`](crate::harness::assert_passes_rule) and
/// [`assert_fails_rule`](crate::harness::assert_fails_rule).
pub const PETS_SCHEMA_SDL: &str = r#"
schema {
  query: QueryRoot
  mutation: MutationRoot
}

interface Being {
  name(surname: Boolean): String
}

interface Pet {
  name(surname: Boolean): String
}

interface Canine {
  name(surname: Boolean): String
}

interface Intelligent {
  iq: Int
}

enum DogCommand {
  SIT
  HEEL
  DOWN
}

enum FurColor {
  BROWN
  BLACK
  TAN
  SPOTTED
}

type Dog implements Being & Pet & Canine {
  name(surname: Boolean): String
  nickname: String
  barkVolume: Int
  barks: Boolean
  doesKnowCommand(dogCommand: DogCommand): Boolean
  isHousetrained(atOtherHomes: Boolean = true): Boolean
  isAtLocation(x: Int, y: Int): Boolean
  owner: Human
}

type Cat implements Being & Pet {
  name(surname: Boolean): String
  nickname: String
  meows: Boolean
  meowVolume: Int
  furColor: FurColor
}

type Human implements Being & Intelligent {
  name(surname: Boolean): String
  pets: [Pet]
  relatives: [Human]
  iq: Int
}

type Alien implements Being & Intelligent {
  name(surname: Boolean): String
  iq: Int
  numEyes: Int
}

union CatOrDog = Cat | Dog
union DogOrHuman = Dog | Human
union HumanOrAlien = Human | Alien

input ComplexInput {
  requiredField: Boolean!
  intField: Int
  stringField: String
  booleanField: Boolean
  stringListField: [String]
}

type ComplicatedArgs {
  intArgField(intArg: Int): String
  nonNullIntArgField(nonNullIntArg: Int!): String
  stringListArgField(stringListArg: [String]): String
  complexArgField(complexArg: ComplexInput): String
  multipleReqs(req1: Int!, req2: Int!): String
}

type QueryRoot {
  human(id: ID): Human
  alien: Alien
  dog: Dog
  cat: Cat
  pet: Pet
  catOrDog: CatOrDog
  dogOrHuman: DogOrHuman
  humanOrAlien: HumanOrAlien
  complicatedArgs: ComplicatedArgs
}

type MutationRoot {
  adoptDog(name: String!): Dog
}
"#;

/// The parsed [`PETS_SCHEMA_SDL`], built once per process.
pub fn pets_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::parse(PETS_SCHEMA_SDL)
            .unwrap_or_else(|err| panic!("The pets fixture schema is invalid: {err}"))
    })
}
