// =============================================================================
// Lottery NFT Integration Tests: Burn & Transfer
// =============================================================================
// Owner burns, id non-reuse after burn, and holder-initiated transfers.
//
// Run: cargo test -p lottery-integration-tests lottery::test_burn_and_transfer

use anyhow::Result;

use super::helpers::*;

// =============================================================================
// Burn
// =============================================================================

#[tokio::test]
async fn test_burn_removes_ticket() -> Result<()> {
    let worker = create_sandbox().await?;
    let signers = create_signers(&worker, 2).await?;
    let LotteryFixture { contract, caller } = setup_lottery(&worker, &signers).await?;
    let player = &signers[1];

    let token_id = mint_default(&contract, &caller, player).await?;
    assert_eq!(total_supply(&contract).await?, "1");

    let result = burn(&contract, &caller, &token_id).await?;
    assert!(result.is_success(), "{:?}", result.failures());
    let events = event_logs(&result);
    let burned = events
        .iter()
        .find(|e| e["event"] == "nft_burn")
        .ok_or_else(|| anyhow::anyhow!("no nft_burn event"))?;
    assert_eq!(burned["data"][0]["owner_id"], player.id().to_string());

    assert_eq!(total_supply(&contract).await?, "0");
    assert_eq!(get_lottery_numbers(&contract, &token_id).await?, None);
    assert_eq!(nft_supply_for_owner(&contract, player.id().as_str()).await?, "0");
    assert!(token_uri(&contract, &token_id).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_ids_not_reused_after_burn() -> Result<()> {
    let worker = create_sandbox().await?;
    let signers = create_signers(&worker, 1).await?;
    let LotteryFixture { contract, caller } = setup_lottery(&worker, &signers).await?;

    mint_default(&contract, &caller, &caller).await?;
    burn(&contract, &caller, "1").await?.into_result()?;

    let next = mint_default(&contract, &caller, &caller).await?;
    assert_eq!(next, "2");
    assert_eq!(total_supply(&contract).await?, "1");

    Ok(())
}

#[tokio::test]
async fn test_burn_by_non_owner_fails() -> Result<()> {
    let worker = create_sandbox().await?;
    let signers = create_signers(&worker, 2).await?;
    let LotteryFixture { contract, caller } = setup_lottery(&worker, &signers).await?;
    let player = &signers[1];

    let token_id = mint_default(&contract, &caller, player).await?;

    let result = burn(&contract, player, &token_id).await?;
    assert!(result.is_failure(), "holder cannot burn, only the contract owner");
    assert_eq!(total_supply(&contract).await?, "1");

    Ok(())
}

// =============================================================================
// Transfer
// =============================================================================

#[tokio::test]
async fn test_nft_transfer() -> Result<()> {
    let worker = create_sandbox().await?;
    let signers = create_signers(&worker, 3).await?;
    let LotteryFixture { contract, caller } = setup_lottery(&worker, &signers).await?;
    let alice = &signers[1];
    let bob = &signers[2];

    let token_id = mint_default(&contract, &caller, alice).await?;

    let result = nft_transfer(&contract, alice, bob, &token_id, Some("gift")).await?;
    assert!(result.is_success(), "{:?}", result.failures());
    let events = event_logs(&result);
    let transfer = events
        .iter()
        .find(|e| e["event"] == "nft_transfer")
        .ok_or_else(|| anyhow::anyhow!("no nft_transfer event"))?;
    assert_eq!(transfer["data"][0]["old_owner_id"], alice.id().to_string());
    assert_eq!(transfer["data"][0]["new_owner_id"], bob.id().to_string());
    assert_eq!(transfer["data"][0]["memo"], "gift");

    let token = nft_token(&contract, &token_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("token missing after transfer"))?;
    assert_eq!(token.owner_id, bob.id().to_string());
    assert_eq!(nft_supply_for_owner(&contract, alice.id().as_str()).await?, "0");
    assert_eq!(nft_supply_for_owner(&contract, bob.id().as_str()).await?, "1");

    Ok(())
}

#[tokio::test]
async fn test_transfer_by_non_holder_fails() -> Result<()> {
    let worker = create_sandbox().await?;
    let signers = create_signers(&worker, 3).await?;
    let LotteryFixture { contract, caller } = setup_lottery(&worker, &signers).await?;
    let alice = &signers[1];
    let bob = &signers[2];

    let token_id = mint_default(&contract, &caller, alice).await?;

    // Contract owner does not hold the ticket either
    let result = nft_transfer(&contract, &caller, bob, &token_id, None).await?;
    assert!(result.is_failure());

    let result = nft_transfer(&contract, bob, bob, &token_id, None).await?;
    assert!(result.is_failure());

    let token = nft_token(&contract, &token_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("token missing"))?;
    assert_eq!(token.owner_id, alice.id().to_string());

    Ok(())
}

#[tokio::test]
async fn test_transfer_to_self_fails() -> Result<()> {
    let worker = create_sandbox().await?;
    let signers = create_signers(&worker, 2).await?;
    let LotteryFixture { contract, caller } = setup_lottery(&worker, &signers).await?;
    let alice = &signers[1];

    let token_id = mint_default(&contract, &caller, alice).await?;

    let result = nft_transfer(&contract, alice, alice, &token_id, None).await?;
    assert!(result.is_failure());

    Ok(())
}
