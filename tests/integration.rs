use envcipher::algorithm::Algorithm;
use envcipher::encoding::Encoding;
use envcipher::{decrypt, encrypt, CryptOptions, DecryptOptions};
use serde_json::json;
use std::collections::HashSet;
use std::str::FromStr;

const SECRET: &str = "abcdefghijklmnopqrstuv1234567890";

#[test]
fn decrypts_payload_produced_by_node_tooling() {
    // fixture produced with node's createCipheriv, iv passed as a 16-hex-character string
    let decrypted = decrypt(&DecryptOptions {
        algorithm: Algorithm::from_str("aes-256-cbc").unwrap(),
        envs: "d4b6baef6ae9313a17b3f736a4e28ba35f4f23a74397a06f75fefe7acc777b81\
               570a12ccee82ff4e2c05f148dce3b17c"
            .to_string(),
        encoding: Encoding::from_str("utf8").unwrap(),
        input: Encoding::from_str("hex").unwrap(),
        iv: "507e1b56bd09de07".to_string(),
        secret: SECRET.into(),
    })
    .unwrap();

    assert_eq!(
        decrypted.decrypted_result,
        json!({"ABC": "123", "DEF": "678", "HIJ": "$ABC$DEF"})
    );
    assert_eq!(
        decrypted.decrypted_envs,
        r#"{"ABC":"123","DEF":"678","HIJ":"$ABC$DEF"}"#
    );
}

#[test]
fn round_trips_under_every_algorithm() {
    let envs = json!({"ABC": "123", "DEF": "678", "HIJ": "$ABC$DEF"});

    for (algorithm, secret) in [
        ("aes-128-cbc", "0123456789abcdef"),
        ("aes-192-cbc", "0123456789abcdef01234567"),
        ("aes-256-cbc", SECRET),
    ] {
        let algorithm = Algorithm::from_str(algorithm).unwrap();

        let encrypted = encrypt(&CryptOptions {
            algorithm,
            envs: envs.to_string(),
            encoding: Encoding::Utf8,
            input: Encoding::Hex,
            secret: secret.into(),
        })
        .unwrap();

        let decrypted = decrypt(&DecryptOptions {
            algorithm,
            envs: encrypted.encrypted_envs,
            encoding: Encoding::Utf8,
            input: Encoding::Hex,
            iv: encrypted.iv,
            secret: secret.into(),
        })
        .unwrap();

        assert_eq!(decrypted.decrypted_result, envs);
    }
}

#[test]
fn ivs_are_unique_across_calls() {
    let options = CryptOptions {
        algorithm: Algorithm::Aes256Cbc,
        envs: r#"{"ABC":"123"}"#.to_string(),
        encoding: Encoding::Utf8,
        input: Encoding::Hex,
        secret: SECRET.into(),
    };

    let mut ivs = HashSet::new();

    for _ in 0..10_000 {
        let encrypted = encrypt(&options).unwrap();

        assert_eq!(encrypted.iv.len(), 16);
        assert!(encrypted
            .iv
            .bytes()
            .all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
        assert!(ivs.insert(encrypted.iv));
    }
}

#[test]
fn wrong_secret_never_silently_succeeds() {
    let envs = r#"{"ABC":"123"}"#;

    let encrypted = encrypt(&CryptOptions {
        algorithm: Algorithm::Aes256Cbc,
        envs: envs.to_string(),
        encoding: Encoding::Utf8,
        input: Encoding::Hex,
        secret: SECRET.into(),
    })
    .unwrap();

    let result = decrypt(&DecryptOptions {
        algorithm: Algorithm::Aes256Cbc,
        envs: encrypted.encrypted_envs,
        encoding: Encoding::Utf8,
        input: Encoding::Hex,
        iv: encrypted.iv,
        secret: "0000000000000000000000000000000v".into(),
    });

    match result {
        Err(_) => {}
        Ok(decrypted) => assert_ne!(decrypted.decrypted_envs, envs),
    }
}

#[test]
fn wrong_iv_never_silently_succeeds() {
    let envs = r#"{"ABC":"123"}"#;

    let encrypted = encrypt(&CryptOptions {
        algorithm: Algorithm::Aes256Cbc,
        envs: envs.to_string(),
        encoding: Encoding::Utf8,
        input: Encoding::Hex,
        secret: SECRET.into(),
    })
    .unwrap();

    let result = decrypt(&DecryptOptions {
        algorithm: Algorithm::Aes256Cbc,
        envs: encrypted.encrypted_envs,
        encoding: Encoding::Utf8,
        input: Encoding::Hex,
        iv: "0000000000000000".to_string(),
        secret: SECRET.into(),
    });

    match result {
        Err(_) => {}
        Ok(decrypted) => assert_ne!(decrypted.decrypted_envs, envs),
    }
}

#[test]
fn tampered_ciphertext_never_silently_succeeds() {
    let envs = r#"{"ABC":"123"}"#;

    let encrypted = encrypt(&CryptOptions {
        algorithm: Algorithm::Aes256Cbc,
        envs: envs.to_string(),
        encoding: Encoding::Utf8,
        input: Encoding::Hex,
        secret: SECRET.into(),
    })
    .unwrap();

    let mut ciphertext = hex::decode(&encrypted.encrypted_envs).unwrap();
    ciphertext[0] ^= 0xff;

    let result = decrypt(&DecryptOptions {
        algorithm: Algorithm::Aes256Cbc,
        envs: hex::encode(ciphertext),
        encoding: Encoding::Utf8,
        input: Encoding::Hex,
        iv: encrypted.iv,
        secret: SECRET.into(),
    });

    match result {
        Err(_) => {}
        Ok(decrypted) => assert_ne!(decrypted.decrypted_envs, envs),
    }
}

#[test]
fn hex_cleartext_round_trips_without_being_text() {
    // raw bytes are shipped by rendering them in the cleartext encoding first
    let envs = hex::encode([0u8, 159, 146, 150]);

    let encrypted = encrypt(&CryptOptions {
        algorithm: Algorithm::Aes256Cbc,
        envs: envs.clone(),
        encoding: Encoding::Hex,
        input: Encoding::Base64,
        secret: SECRET.into(),
    })
    .unwrap();

    let result = decrypt(&DecryptOptions {
        algorithm: Algorithm::Aes256Cbc,
        envs: encrypted.encrypted_envs,
        encoding: Encoding::Hex,
        input: Encoding::Base64,
        iv: encrypted.iv,
        secret: SECRET.into(),
    });

    // the bytes decrypt and re-encode fine, but they are not a JSON document
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "The decrypted payload is not valid JSON");
}
