use serde::{Deserialize, Serialize};

use crate::{FieldKey, Header, Message, MessageId, MessageKind, ProcessId, Value};

#[test]
pub fn test_message_basic() {
    let message_data = "hello".to_string();

    let message =
        Message::new(MessageKind::Application(3), &message_data).expect("Can not create message");

    assert_eq!(message.kind(), MessageKind::Application(3));
    assert!(message.kind().is_application());

    let deserialized_data = message
        .data::<String>()
        .expect("Can not extract data from message");
    assert_eq!(deserialized_data, message_data);
}

#[test]
pub fn test_serialize_works() {
    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct InnerDataType {
        s1: String,
        z: u8,
    }

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct DataType {
        x: i32,
        weight: f64,
        inner: InnerDataType,
    }

    let data = DataType {
        x: 5,
        weight: 0.25,
        inner: InnerDataType {
            s1: "string_1".to_string(),
            z: 10,
        },
    };

    let message = Message::new(MessageKind::Marker, &data).expect("Can not create message");

    let fetched_data = message.data::<DataType>().expect("Can not fetch data");

    assert_eq!(fetched_data, data);
}

#[test]
pub fn test_wrong_payload_type_is_error() {
    let message = Message::new(MessageKind::Presnp, &"text").unwrap();
    assert!(message.data::<u64>().is_err());
}

#[test]
pub fn test_flag_defaults_to_false() {
    let mut message = Message::empty(MessageKind::Application(0));
    assert!(!message.flag());

    message.set_field(FieldKey::Flag, true);
    assert!(message.flag());

    message.set_field(FieldKey::Flag, Value::Int(1));
    assert!(!message.flag());
}

#[test]
pub fn test_stamp_keeps_payload_and_fields() {
    let mut message = Message::new(MessageKind::Report, &7u32)
        .unwrap()
        .with_field(FieldKey::Label, "origin");

    message.stamp(Header {
        id: MessageId(11),
        source: ProcessId(1),
        dest: ProcessId(2),
        round: 4,
        ..Default::default()
    });

    assert_eq!(message.id(), MessageId(11));
    assert_eq!(message.source(), ProcessId(1));
    assert_eq!(message.dest(), ProcessId(2));
    assert_eq!(message.round(), 4);
    assert_eq!(message.data::<u32>().unwrap(), 7);
    assert_eq!(
        message.field(&FieldKey::Label).and_then(Value::as_text),
        Some("origin")
    );
    assert_eq!(
        message.to_string(),
        "m11 report p1->p2 via c0 r4 t0 7 label=\"origin\""
    );
}

#[test]
pub fn test_message_json_round_trip_skips_empty_fields() {
    let message = Message::empty(MessageKind::Marker);
    let json = serde_json::to_string(&message).unwrap();
    assert!(!json.contains("fields"));
    let back: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(back, message);
}

#[test]
pub fn test_named_fields_keep_their_type() {
    let sent_key = FieldKey::Named("sent".to_string());
    let share_key = FieldKey::Named("share".to_string());
    let origin_key = FieldKey::Named("origin".to_string());

    let message = Message::empty(MessageKind::Application(1))
        .with_field(sent_key.clone(), 12i64)
        .with_field(share_key.clone(), 0.125)
        .with_field(origin_key.clone(), ProcessId(3));

    let sent = message.field(&sent_key).unwrap();
    assert_eq!(sent.as_int(), Some(12));
    assert_eq!(sent.as_float(), None);

    let share = message.field(&share_key).unwrap();
    assert_eq!(share.as_float(), Some(0.125));
    assert_eq!(share.as_process(), None);

    let origin = message.field(&origin_key).unwrap();
    assert_eq!(origin.as_process(), Some(ProcessId(3)));
    assert_eq!(origin.as_int(), None);

    assert_eq!(message.fields().len(), 3);
}
