// =============================================================================
// Lottery NFT Integration Tests: Enumeration
// =============================================================================
// NEP-181 enumeration views and the NEP-177 token metadata they return.
//
// Run: cargo test -p lottery-integration-tests lottery::test_enumeration

use anyhow::Result;

use super::helpers::*;

#[tokio::test]
async fn test_nft_tokens_pagination() -> Result<()> {
    let worker = create_sandbox().await?;
    let signers = create_signers(&worker, 1).await?;
    let LotteryFixture { contract, caller } = setup_lottery(&worker, &signers).await?;

    for _ in 0..5 {
        mint_default(&contract, &caller, &caller).await?;
    }

    let all = nft_tokens(&contract, None, None).await?;
    assert_eq!(all.len(), 5);

    let page = nft_tokens(&contract, Some("1"), Some(2)).await?;
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].token_id, all[1].token_id);
    assert_eq!(page[1].token_id, all[2].token_id);

    // Past the end
    let empty = nft_tokens(&contract, Some("10"), None).await?;
    assert!(empty.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_tokens_for_owner() -> Result<()> {
    let worker = create_sandbox().await?;
    let signers = create_signers(&worker, 3).await?;
    let LotteryFixture { contract, caller } = setup_lottery(&worker, &signers).await?;
    let alice = &signers[1];
    let bob = &signers[2];

    mint_default(&contract, &caller, alice).await?;
    mint_default(&contract, &caller, bob).await?;
    mint_default(&contract, &caller, alice).await?;

    assert_eq!(nft_supply_for_owner(&contract, alice.id().as_str()).await?, "2");
    assert_eq!(nft_supply_for_owner(&contract, bob.id().as_str()).await?, "1");
    assert_eq!(nft_supply_for_owner(&contract, caller.id().as_str()).await?, "0");

    let mut alice_ids: Vec<String> =
        nft_tokens_for_owner(&contract, alice.id().as_str(), None, None)
            .await?
            .into_iter()
            .map(|t| t.token_id)
            .collect();
    alice_ids.sort();
    assert_eq!(alice_ids, vec!["1".to_string(), "3".to_string()]);

    let limited = nft_tokens_for_owner(&contract, alice.id().as_str(), None, Some(1)).await?;
    assert_eq!(limited.len(), 1);

    let none = nft_tokens_for_owner(&contract, caller.id().as_str(), None, None).await?;
    assert!(none.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_token_metadata() -> Result<()> {
    let worker = create_sandbox().await?;
    let signers = create_signers(&worker, 1).await?;
    let LotteryFixture { contract, caller } = setup_lottery(&worker, &signers).await?;

    let token_id = mint_default(&contract, &caller, &caller).await?;

    let token = nft_token(&contract, &token_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("token missing"))?;
    let metadata = token
        .metadata
        .ok_or_else(|| anyhow::anyhow!("token has no metadata"))?;

    assert_eq!(metadata.title.as_deref(), Some("Lottery Ticket #1"));
    assert_eq!(metadata.copies, Some(1));
    assert!(
        metadata
            .media
            .as_deref()
            .is_some_and(|m| m.starts_with(SVG_DATA_URI_PREFIX)),
        "media should be an inline SVG"
    );

    let extra: serde_json::Value = serde_json::from_str(
        metadata
            .extra
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("metadata has no extra"))?,
    )?;
    assert_eq!(extra["lottery_numbers"], serde_json::json!([1, 8, 9, 4]));
    assert_eq!(extra["amount"], "3");
    assert_eq!(extra["issue_index"], "1");
    assert_eq!(extra["claimed"], false);

    Ok(())
}
